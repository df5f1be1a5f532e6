use rayon_max_subarray::io::generate;
use rayon_max_subarray::prelude::*;

fn main() -> Result<()> {
    let input = generate(100_000, -10..=10, &mut rand::thread_rng());
    let config = ReduceConfig::builder()
        .workers(4)
        .sequential_threshold(0)
        .build()?;
    let reducer = ParallelReducer::new(config)?;
    let sum = reducer.solve(&input)?;
    let solution = solve_sequential(&input);
    assert_eq!(sum, solution.sum);
    println!(
        "max sum {} on {:?} ({} elements)",
        sum,
        solution.range,
        solution.range.len()
    );
    Ok(())
}
