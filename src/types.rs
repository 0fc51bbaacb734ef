/// Raw textual field value as read from a dataset row.
/// Examples: `2024-01-15 17:42:00`, `Amazônia`, `SÃO FÉLIX DO XINGU`
pub type FieldValue = String;
/// Identifier for the source that produced a dataset.
/// Examples: `focos_br_pa_ref_2023`, `in_memory`
pub type SourceId = String;
/// Operator-facing label for a dataset in the catalog.
/// Examples: `2023`, `focos_br_pa_ref_2024`
pub type DatasetLabel = String;
/// One formatted record line sent to the presenter.
/// Example: `1 ,a1b2 ,-1.23 ,-48.5 ,2024-01-15 ,Brasil ,PARÁ ,BELÉM ,Amazônia`
pub type RecordLine = String;
