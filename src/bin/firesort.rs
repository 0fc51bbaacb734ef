use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    firesort::apps::run_sort_session(std::env::args().skip(1))
}
