//! Integration tests for u-panel-core.

use u_panel_core::job::{Job, Orientation};
use u_panel_core::panel::Panel;
use u_panel_core::placement::{Placement, PlacementStats};
use u_panel_core::result::{SolveResult, SolveSummary};
use u_panel_core::solver::{Config, ProgressInfo, Strategy};
use u_panel_core::Error;

mod job_tests {
    use super::*;

    #[test]
    fn test_orientation_dimensions() {
        let job = Job::new("board", 5.0, 2.0);
        assert_eq!(job.dimensions_for(Orientation::Normal), (5.0, 2.0));
        assert_eq!(job.dimensions_for(Orientation::Rotated), (2.0, 5.0));
        assert_eq!(job.max_dimension(), 5.0);
        assert_eq!(job.min_dimension(), 2.0);
        assert!(!job.is_square());
    }

    #[test]
    fn test_job_validation_errors() {
        let cases = [
            Job::new("zero", 0.0, 1.0),
            Job::new("negative", 1.0, -2.0),
            Job::new("nan", f64::NAN, 1.0),
            Job::new("none", 1.0, 1.0).with_quantity(0),
        ];

        for job in cases {
            assert!(
                matches!(job.validate(), Err(Error::InvalidJob(_))),
                "{} should be rejected",
                job.id()
            );
        }
    }

    #[test]
    fn test_panel_accepts_either_orientation() {
        let panel = Panel::new(4.0, 10.0);
        assert!(panel.accepts(&Job::new("tall", 4.0, 10.0)));
        assert!(panel.accepts(&Job::new("wide", 10.0, 4.0)));
        assert!(!panel.accepts(&Job::new("big", 10.0, 10.0)));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.strategy, Strategy::Random);
        assert_eq!(config.exhaustive_tail, 2);
        assert_eq!(config.time_limit_ms, 0);
        assert_eq!(config.threads, 0);
        assert_eq!(config.seed, None);
        assert!(config.sort_largest_first);
        assert_eq!(config.sync_period_ms, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_interval_floors() {
        let config = Config::new()
            .with_sync_period(0)
            .with_poll_interval(0)
            .with_progress_interval(0);
        assert_eq!(config.sync_period_ms, 1);
        assert_eq!(config.poll_interval_ms, 1);
        assert_eq!(config.progress_interval_ms, 1);
    }

    #[test]
    fn test_rejects_non_finite_origin() {
        let config = Config::new().with_origin(f64::INFINITY, 0.0);
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_progress_info_builder() {
        let info = ProgressInfo::new()
            .with_evaluated(96, Some(384))
            .with_best(Some(12.5), 0.8)
            .with_elapsed(1500)
            .with_phase("Exhaustive search");

        assert_eq!(info.progress_percent(), Some(0.25));
        assert_eq!(info.best_area, Some(12.5));
        assert_eq!(info.elapsed_ms, 1500);
        assert_eq!(info.phase, "Exhaustive search");
        assert!(info.running);
    }
}

mod result_tests {
    use super::*;

    fn sample() -> SolveResult {
        let mut result = SolveResult::new().with_strategy("Exhaustive");
        result.placements = vec![
            Placement::new("a", 0, 0.0, 0.0, 2.0, 1.0),
            Placement::new("a", 1, 0.0, 1.0, 1.0, 2.0).with_orientation(Orientation::Rotated),
            Placement::new("b", 0, 2.0, 0.0, 1.0, 1.0),
        ];
        result.area = 9.0;
        result.used_area = 5.0;
        result.utilization = 5.0 / 9.0;
        result.corners = 6;
        result.permutations = Some(48);
        result.possible_permutations = Some(48);
        result.completed = true;
        result
    }

    #[test]
    fn test_extents_and_stats() {
        let result = sample();
        assert_eq!(result.extents(), (3.0, 3.0));

        let stats: PlacementStats = result.placement_stats();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.rotated_count, 1);
        assert_eq!(stats.job_distribution.get("a"), Some(&2));
    }

    #[test]
    fn test_summary() {
        let result = sample();
        let summary = SolveSummary::from(&result);

        assert_eq!(summary.total_placed, 3);
        assert_eq!(summary.corners, 6);
        assert_eq!(summary.evaluated, 48);
        assert_eq!(summary.strategy, "Exhaustive");
        assert_eq!(result.search_coverage(), Some(1.0));
        assert!(result.completed_normally());
    }

    #[test]
    fn test_panel_too_small_message() {
        let err = Error::PanelTooSmall {
            width: 6.0,
            height: 4.5,
        };
        assert_eq!(
            err.to_string(),
            "Panel size 6.00x4.50 is too small to hold jobs"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_serializes_placements() {
        let value = serde_json::to_value(sample()).expect("serializes");
        assert_eq!(value["placements"][1]["orientation"], "Rotated");
        assert_eq!(value["corners"], 6);
    }
}
