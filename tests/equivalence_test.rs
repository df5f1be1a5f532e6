use rand::prelude::*;
use rayon_max_subarray::io::{generate, DEFAULT_RANGE};
use rayon_max_subarray::prelude::*;

fn always_parallel(workers: usize) -> ParallelReducer {
    let config = ReduceConfig::builder()
        .workers(workers)
        .sequential_threshold(0)
        .max_threads(4)
        .build()
        .expect("invalid configuration");
    ParallelReducer::new(config).expect("Thread pool build failed")
}

#[test]
fn test_scenarios() {
    let input = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    let solution = solve_sequential(&input);
    assert_eq!(solution.sum, 6);
    assert_eq!(solution.witness(&input), &[4, -1, 2, 1]);

    let input = [-1, -2, -3];
    let solution = solve_sequential(&input);
    assert_eq!(solution.sum, -1);
    assert_eq!(solution.witness(&input), &[-1]);

    let solution = solve_sequential(&[]);
    assert_eq!(solution.sum, 0);
    assert!(solution.witness(&[]).is_empty());

    assert_eq!(always_parallel(4).solve(&[5]).unwrap(), 5);
}

#[test]
fn test_chunk_count_invariance() {
    let mut rng = rand::thread_rng();
    for size in (0..10)
        .chain(100..105)
        .chain(std::iter::once(10_000))
    {
        let input = generate(size, -20..=20, &mut rng);
        let expected = solve_sequential(&input).sum;
        for workers in [1, 2, 7, size + 5] {
            assert_eq!(
                always_parallel(workers).solve(&input).unwrap(),
                expected,
                "size {} workers {}",
                size,
                workers
            );
        }
    }
}

#[test]
fn test_all_negative() {
    let mut rng = rand::thread_rng();
    for size in 1..50 {
        let input = generate(size, -1_000..=-1, &mut rng);
        let best = input.iter().copied().max().map(i64::from);
        assert_eq!(Some(solve_sequential(&input).sum), best);
        assert_eq!(Some(always_parallel(3).solve(&input).unwrap()), best);
    }
}

#[test]
fn test_parallel_aggregate_matches_whole_chunk() {
    let mut rng = rand::thread_rng();
    let input = generate(5_000, DEFAULT_RANGE, &mut rng);
    let expected = Chunk::whole(&input).aggregate();
    for workers in [1, 3, 8, 64] {
        assert_eq!(always_parallel(workers).reduce(&input).unwrap(), expected);
        let reducer = always_parallel(workers).with_scheduler(SequentialScheduler);
        assert_eq!(reducer.reduce(&input).unwrap(), expected);
    }
}

#[test]
fn test_million_elements() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let input = generate(1_000_000, DEFAULT_RANGE, &mut rng);
    let sequential = solve_sequential(&input);
    let parallel = solve_parallel(&input, 8).unwrap();
    assert_eq!(parallel, sequential.sum);
    let witness_sum: i64 = sequential.witness(&input).iter().map(|&v| i64::from(v)).sum();
    assert_eq!(witness_sum, sequential.sum);
}

#[test]
fn test_extreme_values() {
    let input = vec![i32::MAX, i32::MIN, i32::MAX, i32::MAX, i32::MIN];
    let expected = 2 * i64::from(i32::MAX);
    assert_eq!(solve_sequential(&input).sum, expected);
    for workers in 1..8 {
        assert_eq!(always_parallel(workers).solve(&input).unwrap(), expected);
    }
}
