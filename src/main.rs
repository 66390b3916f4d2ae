use clap::Parser;
use log::info;

use heap_rs::{BinaryHeap, Result};

#[derive(Parser)]
#[command(name = "heap-demo", about = "Build a min-heap and pop from it", version)]
struct Cli {
    /// Values to insert, in order
    #[arg(allow_negative_numbers = true, default_values_t = [20, 15, 8, 38, 71, 2, -1, 27])]
    elements: Vec<i64>,

    /// Number of minimums to extract
    #[arg(long, default_value_t = 1)]
    extract: usize,

    /// Extract everything and print the sorted values
    #[arg(long)]
    drain: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut heap = BinaryHeap::with_capacity(cli.elements.len());
    heap.build_heap(cli.elements);
    heap.validate()?;
    info!("heap after build: {}", heap);

    if cli.drain {
        println!("{:?}", heap.into_sorted_vec());
        return Ok(());
    }

    for _ in 0..cli.extract {
        let min = heap.extract_min()?;
        info!("extracted {}", min);
        heap.validate()?;
    }
    println!("{}", heap);
    Ok(())
}
