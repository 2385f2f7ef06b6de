#![cfg(feature = "dev")]
//! Tests for the fitted executor: single predictions and grid search.

use approx::assert_relative_eq;

use gridprice::internals::algorithms::combination::CombinationStrategy;
use gridprice::internals::engine::executor::{
    DEFAULT_BLOCK_SIZE, DEFAULT_GRID_SIZE, EstimatorConfig, Mode, PriceExecutor,
};
use gridprice::internals::engine::output::PredictionResult;
use gridprice::internals::math::scaling::{FeatureScale, ScalingMethod};
use gridprice::internals::math::transform::FeatureTransform;
use gridprice::internals::primitives::sample::{Context, HistoricalSample};

fn config(grid_max: usize, block_max: usize) -> EstimatorConfig<f64> {
    EstimatorConfig {
        grid_max,
        block_max,
        ..EstimatorConfig::default()
    }
}

/// Expensive at (1, 1), cheap at (4, 4).
fn two_corner_history() -> Vec<HistoricalSample<f64>> {
    vec![
        HistoricalSample::new(2.0, 2.0, 1.0, 1.0, 10.0),
        HistoricalSample::new(2.0, 2.0, 4.0, 4.0, 1.0),
    ]
}

fn mixed_history() -> Vec<HistoricalSample<f64>> {
    vec![
        HistoricalSample::new(2.0, 2.0, 1.0, 2.0, 8.0),
        HistoricalSample::new(2.0, 2.0, 2.0, 5.0, 4.5),
        HistoricalSample::new(2.0, 2.0, 3.0, 1.0, 6.0),
        HistoricalSample::new(2.0, 2.0, 4.0, 7.0, 3.0),
        HistoricalSample::new(2.0, 2.0, 2.0, 8.0, 5.0),
        HistoricalSample::new(2.0, 2.0, 5.0, 3.0, 7.0),
    ]
}

// ============================================================================
// Fit Tests
// ============================================================================

#[test]
fn test_scale_computed_from_transformed_history() {
    let samples = two_corner_history();
    let executor = PriceExecutor::new(config(4, 4), &samples);

    // Grid and block sizes {1, 4}: variance 2.25.
    assert_eq!(executor.scale().as_slice(), &[0.0, 0.0, 2.25, 2.25]);
    assert_eq!(executor.samples().len(), 2);
}

#[test]
fn test_unit_scaling_method() {
    let samples = two_corner_history();
    let cfg = EstimatorConfig {
        scaling_method: ScalingMethod::Unit,
        ..config(4, 4)
    };
    let executor = PriceExecutor::new(cfg, &samples);
    assert_eq!(executor.scale(), &FeatureScale::unit());
}

// ============================================================================
// Prediction Tests
// ============================================================================

#[test]
fn test_predict_exact_sample() {
    let samples = vec![HistoricalSample::new(2.0, 2.0, 3.0, 128.0, 4.25)];
    let cfg = EstimatorConfig {
        neighbors: 1,
        ..config(4, 4)
    };
    let executor = PriceExecutor::new(cfg, &samples);

    let result = executor.predict(3, 128);
    assert_eq!(result.grid_size, 3);
    assert_eq!(result.block_size, 128);
    assert_eq!(result.price, 4.25);
}

#[test]
fn test_predict_empty_history_is_zero() {
    let samples: Vec<HistoricalSample<f64>> = Vec::new();
    let executor = PriceExecutor::new(config(4, 4), &samples);
    assert_eq!(executor.predict(2, 64).price, 0.0);
}

#[test]
fn test_predict_log_transform_interpolates_in_log_space() {
    // ln 2 lies midway between ln 1 and ln 4.
    let samples = vec![
        HistoricalSample::new(2.0, 2.0, 1.0, 64.0, 10.0),
        HistoricalSample::new(2.0, 2.0, 4.0, 64.0, 20.0),
    ];
    let cfg = EstimatorConfig {
        neighbors: 2,
        transform: FeatureTransform::Log,
        scaling_method: ScalingMethod::Unit,
        ..config(4, 64)
    };
    let executor = PriceExecutor::new(cfg, &samples);

    assert_relative_eq!(executor.predict(2, 64).price, 15.0, epsilon = 1e-12);
}

#[test]
fn test_workspace_reuse_matches_fresh_prediction() {
    let samples = mixed_history();
    let executor = PriceExecutor::new(config(5, 8), &samples);
    let mut ws = executor.workspace();

    for g in 1..=5 {
        for b in 1..=8 {
            let reused = executor.evaluate(g, b, &mut ws);
            assert_eq!(reused, executor.predict(g, b).price);
        }
    }
}

// ============================================================================
// Grid Search Tests
// ============================================================================

#[test]
fn test_search_single_cell() {
    let samples = mixed_history();
    let best = PriceExecutor::new(config(1, 1), &samples).search();
    assert_eq!((best.grid_size, best.block_size), (1, 1));
}

#[test]
fn test_search_empty_history_returns_first_cell() {
    let samples: Vec<HistoricalSample<f64>> = Vec::new();
    let best = PriceExecutor::new(config(16, 1024), &samples).search();
    assert_eq!(
        best,
        PredictionResult {
            grid_size: 1,
            block_size: 1,
            price: 0.0
        }
    );
}

#[test]
fn test_search_first_optimum_wins() {
    // With one neighbor every cell costs exactly the same.
    let samples = vec![HistoricalSample::new(2.0, 2.0, 3.0, 3.0, 5.0)];
    let cfg = EstimatorConfig {
        neighbors: 1,
        ..config(6, 6)
    };
    let best = PriceExecutor::new(cfg, &samples).search();
    assert_eq!((best.grid_size, best.block_size, best.price), (1, 1, 5.0));
}

#[test]
fn test_search_finds_first_cheap_cell_row_major() {
    // Nearest-neighbor prices: cells with g + b > 5 take the cheap sample.
    // Equidistant cells keep the first sample.
    let samples = two_corner_history();
    let cfg = EstimatorConfig {
        neighbors: 1,
        ..config(4, 4)
    };
    let best = PriceExecutor::new(cfg, &samples).search();
    assert_eq!((best.grid_size, best.block_size, best.price), (2, 4, 1.0));
}

#[test]
fn test_search_is_minimal_and_within_bounds() {
    let samples = mixed_history();
    for strategy in [
        CombinationStrategy::LocalCorrection,
        CombinationStrategy::InverseDistance,
        CombinationStrategy::InverseSquaredDistance,
    ] {
        let cfg = EstimatorConfig {
            strategy,
            ..config(6, 10)
        };
        let executor = PriceExecutor::new(cfg, &samples);
        let best = executor.search();

        assert!((1..=6).contains(&best.grid_size));
        assert!((1..=10).contains(&best.block_size));
        assert_eq!(
            best.price,
            executor.predict(best.grid_size, best.block_size).price
        );

        for g in 1..=6 {
            for b in 1..=10 {
                let price = executor.predict(g, b).price;
                assert!(best.price <= price, "({g}, {b}) beats the search result");
                if (g, b) < (best.grid_size, best.block_size) {
                    assert!(best.price < price, "earlier optimum ({g}, {b}) skipped");
                }
            }
        }
    }
}

#[test]
fn test_search_uses_context() {
    // Two contexts with opposite cheap corners.
    let samples = vec![
        HistoricalSample::new(1.0, 1.0, 1.0, 1.0, 1.0),
        HistoricalSample::new(1.0, 1.0, 3.0, 3.0, 9.0),
        HistoricalSample::new(8.0, 8.0, 1.0, 1.0, 9.0),
        HistoricalSample::new(8.0, 8.0, 3.0, 3.0, 1.0),
    ];
    let cfg = |m: f64| EstimatorConfig {
        context: Context::new(m, m),
        neighbors: 1,
        scaling_method: ScalingMethod::Unit,
        ..config(3, 3)
    };

    let low = PriceExecutor::new(cfg(1.0), &samples).search();
    assert_eq!((low.grid_size, low.block_size, low.price), (1, 1, 1.0));

    let high = PriceExecutor::new(cfg(8.0), &samples).search();
    assert_eq!(high.price, 1.0);
    assert!(high.grid_size + high.block_size > 4);
}

// ============================================================================
// Mode Tests
// ============================================================================

#[test]
fn test_run_dispatches_mode() {
    let samples = mixed_history();

    let search_cfg = config(4, 8);
    let executor = PriceExecutor::new(search_cfg, &samples);
    assert_eq!(executor.run(), executor.search());

    let predict_cfg = EstimatorConfig {
        mode: Mode::Predict {
            grid_size: 3,
            block_size: 6,
        },
        ..config(4, 8)
    };
    let executor = PriceExecutor::new(predict_cfg, &samples);
    assert_eq!(executor.run(), executor.predict(3, 6));
}

#[test]
fn test_default_mode_and_candidate() {
    assert_eq!(Mode::default(), Mode::Search);
    assert_eq!((DEFAULT_GRID_SIZE, DEFAULT_BLOCK_SIZE), (1, 255));
}

#[test]
fn test_workspace_sized_by_neighbor_count() {
    let samples = mixed_history();
    let cfg = EstimatorConfig {
        neighbors: 2,
        ..config(4, 4)
    };
    let executor = PriceExecutor::new(cfg, &samples);
    let ws = executor.workspace();
    assert!(ws.ranking.entries.capacity() >= samples.len());
    assert!(ws.neighborhood.indices.capacity() >= 2);
}

#[test]
fn test_constant_fractional_context_is_ignored() {
    // Same geometry, context shifted by one in a column that never varies.
    let history = |m: f64| {
        vec![
            HistoricalSample::new(m, 2.0, 1.0, 128.0, 10.0),
            HistoricalSample::new(m, 2.0, 2.0, 128.0, 4.0),
            HistoricalSample::new(m, 2.0, 4.0, 128.0, 7.0),
        ]
    };
    let cfg = |m: f64| EstimatorConfig {
        context: Context::new(m, 2.0),
        strategy: CombinationStrategy::InverseDistance,
        ..config(4, 128)
    };

    let integral = history(2.0);
    let fractional = history(0.3);
    let a = PriceExecutor::new(cfg(3.0), &integral);
    let b = PriceExecutor::new(cfg(1.3), &fractional);

    assert_eq!(b.scale().as_slice()[0], 0.0);
    assert_eq!(a.scale(), b.scale());
    assert_eq!(a.predict(1, 128).price, b.predict(1, 128).price);
}

// ============================================================================
// Parallel Tests
// ============================================================================

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_search_matches_sequential() {
    let samples = mixed_history();
    for strategy in [
        CombinationStrategy::LocalCorrection,
        CombinationStrategy::InverseDistance,
    ] {
        let sequential = PriceExecutor::new(
            EstimatorConfig {
                strategy,
                ..config(12, 40)
            },
            &samples,
        )
        .search();
        let parallel = PriceExecutor::new(
            EstimatorConfig {
                strategy,
                parallel: true,
                ..config(12, 40)
            },
            &samples,
        )
        .search();
        assert_eq!(sequential, parallel);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_search_keeps_first_tie() {
    let samples = vec![HistoricalSample::new(2.0, 2.0, 3.0, 3.0, 5.0)];
    let cfg = EstimatorConfig {
        neighbors: 1,
        parallel: true,
        ..config(8, 8)
    };
    let best = PriceExecutor::new(cfg, &samples).search();
    assert_eq!((best.grid_size, best.block_size), (1, 1));
}
