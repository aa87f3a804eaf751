use portfolio_balancer_core::models::action::{Action, ActionKind};
use portfolio_balancer_core::models::portfolio::Portfolio;
use portfolio_balancer_core::models::position::Position;
use portfolio_balancer_core::models::report::{RebalanceReport, ReportEntry};
use portfolio_balancer_core::models::settings::{
    PeriodUnit, PlanningSettings, RebalanceFrequency, Settings,
};
use portfolio_balancer_core::models::strategy::{MonthAction, MonthlyStrategyEntry};

// ═══════════════════════════════════════════════════════════════════
//  Position
// ═══════════════════════════════════════════════════════════════════

mod position {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let p = Position::new("MSCI World", 70_000.0, 70.0);
        assert_eq!(p.name, "MSCI World");
        assert_eq!(p.current_value, 70_000.0);
        assert_eq!(p.target_ratio, 70.0);
    }

    #[test]
    fn new_generates_unique_ids() {
        let a = Position::new("A", 1.0, 1.0);
        let b = Position::new("A", 1.0, 1.0);
        assert_ne!(a.id, b.id);
    }

    // ── Validity filter ───────────────────────────────────────────

    #[test]
    fn valid_with_positive_numbers() {
        assert!(Position::new("Gold", 10_000.0, 10.0).is_valid());
    }

    #[test]
    fn valid_with_zero_value() {
        // A freshly opened position legitimately starts at 0
        assert!(Position::new("New ETF", 0.0, 25.0).is_valid());
    }

    #[test]
    fn valid_with_zero_ratio() {
        // Being phased out: still tracked, target share of nothing
        assert!(Position::new("Legacy fund", 5_000.0, 0.0).is_valid());
    }

    #[test]
    fn invalid_with_empty_name() {
        assert!(!Position::new("", 1_000.0, 10.0).is_valid());
    }

    #[test]
    fn invalid_with_whitespace_name() {
        assert!(!Position::new("   ", 1_000.0, 10.0).is_valid());
    }

    #[test]
    fn invalid_with_negative_value() {
        assert!(!Position::new("Gold", -1.0, 10.0).is_valid());
    }

    #[test]
    fn invalid_with_negative_ratio() {
        assert!(!Position::new("Gold", 1_000.0, -10.0).is_valid());
    }

    // ── Serde ─────────────────────────────────────────────────────

    #[test]
    fn serializes_with_camel_case_fields() {
        let p = Position::new("Gold", 10_000.0, 10.0);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"currentValue\""));
        assert!(json.contains("\"targetRatio\""));
        assert!(!json.contains("current_value"));
    }

    #[test]
    fn serde_roundtrip() {
        let p = Position::new("MSCI World", 70_000.0, 70.0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio
// ═══════════════════════════════════════════════════════════════════

mod portfolio {
    use super::*;

    #[test]
    fn default_is_empty() {
        let p = Portfolio::default();
        assert!(p.positions.is_empty());
        assert_eq!(p.settings, Settings::default());
    }

    #[test]
    fn starter_positions_are_the_three_fund_split() {
        let p = Portfolio::with_default_positions();
        assert_eq!(p.positions.len(), 3);
        assert_eq!(p.positions[0].name, "MSCI World");
        assert_eq!(p.positions[1].name, "Gold");
        assert_eq!(p.positions[2].name, "Bank");
    }

    #[test]
    fn starter_positions_sum_to_100_percent() {
        let p = Portfolio::with_default_positions();
        let total_ratio: f64 = p.positions.iter().map(|pos| pos.target_ratio).sum();
        assert!((total_ratio - 100.0).abs() < 1e-9);
        let total_value: f64 = p.positions.iter().map(|pos| pos.current_value).sum();
        assert!((total_value - 100_000.0).abs() < 1e-9);
    }

    #[test]
    fn serde_roundtrip() {
        let p = Portfolio::with_default_positions();
        let json = serde_json::to_string(&p).unwrap();
        let back: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_values() {
        let s = Settings::default();
        assert!(!s.is_advanced_mode);
        assert_eq!(s.monthly_savings, 0.0);
        assert_eq!(s.planning_period, 12);
        assert_eq!(s.period_unit, PeriodUnit::Months);
        assert_eq!(s.rebalance_frequency, RebalanceFrequency::Monthly);
    }

    #[test]
    fn planning_months_passes_months_through() {
        let s = Settings {
            planning_period: 18,
            period_unit: PeriodUnit::Months,
            ..Settings::default()
        };
        assert_eq!(s.planning_months(), 18);
    }

    #[test]
    fn planning_months_converts_years() {
        let s = Settings {
            planning_period: 2,
            period_unit: PeriodUnit::Years,
            ..Settings::default()
        };
        assert_eq!(s.planning_months(), 24);
    }

    #[test]
    fn planning_months_saturates_instead_of_overflowing() {
        let s = Settings {
            planning_period: u32::MAX,
            period_unit: PeriodUnit::Years,
            ..Settings::default()
        };
        assert_eq!(s.planning_months(), u32::MAX);
    }

    #[test]
    fn planning_inputs_carries_the_engine_fields() {
        let s = Settings {
            is_advanced_mode: true,
            monthly_savings: 500.0,
            planning_period: 1,
            period_unit: PeriodUnit::Years,
            rebalance_frequency: RebalanceFrequency::Quarterly,
        };
        let inputs = s.planning_inputs();
        assert!(inputs.advanced_mode_enabled);
        assert_eq!(inputs.monthly_savings, 500.0);
        assert_eq!(inputs.planning_months, 12);
    }

    #[test]
    fn planning_settings_default() {
        let p = PlanningSettings::default();
        assert!(!p.advanced_mode_enabled);
        assert_eq!(p.monthly_savings, 0.0);
        assert_eq!(p.planning_months, 12);
    }

    #[test]
    fn deserializes_host_settings_shape() {
        // The shape hosts persist between sessions
        let json = r#"{
            "isAdvancedMode": true,
            "monthlySavings": 500.0,
            "planningPeriod": 2,
            "periodUnit": "years",
            "rebalanceFrequency": "quarterly"
        }"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert!(s.is_advanced_mode);
        assert_eq!(s.monthly_savings, 500.0);
        assert_eq!(s.planning_period, 2);
        assert_eq!(s.period_unit, PeriodUnit::Years);
        assert_eq!(s.rebalance_frequency, RebalanceFrequency::Quarterly);
    }

    #[test]
    fn serde_roundtrip() {
        let s = Settings {
            is_advanced_mode: true,
            monthly_savings: 1_000.0,
            planning_period: 36,
            period_unit: PeriodUnit::Months,
            rebalance_frequency: RebalanceFrequency::Yearly,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PeriodUnit & RebalanceFrequency
// ═══════════════════════════════════════════════════════════════════

mod period_unit {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(PeriodUnit::Months.to_string(), "months");
        assert_eq!(PeriodUnit::Years.to_string(), "years");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PeriodUnit::Years).unwrap(), "\"years\"");
    }
}

mod rebalance_frequency {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(RebalanceFrequency::Monthly.to_string(), "monthly");
        assert_eq!(RebalanceFrequency::Quarterly.to_string(), "quarterly");
        assert_eq!(RebalanceFrequency::Yearly.to_string(), "yearly");
    }

    #[test]
    fn interval_in_months() {
        assert_eq!(RebalanceFrequency::Monthly.months(), 1);
        assert_eq!(RebalanceFrequency::Quarterly.months(), 3);
        assert_eq!(RebalanceFrequency::Yearly.months(), 12);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RebalanceFrequency::Quarterly).unwrap(),
            "\"quarterly\""
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Action & ActionKind
// ═══════════════════════════════════════════════════════════════════

mod action_kind {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ActionKind::Buy.to_string(), "buy");
        assert_eq!(ActionKind::Sell.to_string(), "sell");
        assert_eq!(ActionKind::Hold.to_string(), "hold");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ActionKind::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&ActionKind::Hold).unwrap(), "\"hold\"");
    }
}

mod classify {
    use super::*;

    #[test]
    fn zero_delta_is_hold() {
        let a = Action::classify(0.0);
        assert_eq!(a.kind, ActionKind::Hold);
        assert_eq!(a.amount, 0.0);
    }

    #[test]
    fn tiny_positive_delta_is_hold() {
        let a = Action::classify(0.009);
        assert_eq!(a.kind, ActionKind::Hold);
        assert_eq!(a.amount, 0.0);
    }

    #[test]
    fn tiny_negative_delta_is_hold() {
        let a = Action::classify(-0.009);
        assert_eq!(a.kind, ActionKind::Hold);
        assert_eq!(a.amount, 0.0);
    }

    #[test]
    fn delta_at_tolerance_is_a_trade() {
        // Exactly 0.01 is no longer inside the dead zone
        assert_eq!(Action::classify(0.01).kind, ActionKind::Buy);
        assert_eq!(Action::classify(-0.01).kind, ActionKind::Sell);
    }

    #[test]
    fn positive_delta_is_buy_of_that_amount() {
        let a = Action::classify(10_000.0);
        assert_eq!(a.kind, ActionKind::Buy);
        assert_eq!(a.amount, 10_000.0);
    }

    #[test]
    fn negative_delta_is_sell_of_the_magnitude() {
        let a = Action::classify(-10_000.0);
        assert_eq!(a.kind, ActionKind::Sell);
        assert_eq!(a.amount, 10_000.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ReportEntry
// ═══════════════════════════════════════════════════════════════════

mod report_entry {
    use super::*;

    #[test]
    fn holding_exposes_the_position() {
        let p = Position::new("Gold", 10_000.0, 10.0);
        let entry = ReportEntry::Holding(p.clone());
        assert_eq!(entry.name(), "Gold");
        assert_eq!(entry.current_value(), 10_000.0);
        assert_eq!(entry.target_ratio(), 10.0);
        assert!(!entry.is_unspent());
        assert_eq!(entry.position(), Some(&p));
    }

    #[test]
    fn unspent_bucket_holds_nothing() {
        let entry = ReportEntry::Unspent { target_ratio: 10.0 };
        assert_eq!(entry.name(), "unspent");
        assert_eq!(entry.current_value(), 0.0);
        assert_eq!(entry.target_ratio(), 10.0);
        assert!(entry.is_unspent());
        assert_eq!(entry.position(), None);
    }

    #[test]
    fn bucket_ratio_may_be_negative() {
        // Over-allocated portfolio: the bucket absorbs the excess
        let entry = ReportEntry::Unspent {
            target_ratio: -20.0,
        };
        assert_eq!(entry.target_ratio(), -20.0);
    }

    #[test]
    fn a_position_named_unspent_is_still_a_holding() {
        let entry = ReportEntry::Holding(Position::new("unspent", 5_000.0, 50.0));
        assert!(!entry.is_unspent());
        assert_eq!(entry.current_value(), 5_000.0);
    }

    #[test]
    fn serializes_tagged() {
        let holding = ReportEntry::Holding(Position::new("Gold", 10_000.0, 10.0));
        let json = serde_json::to_string(&holding).unwrap();
        assert!(json.contains("\"kind\":\"holding\""));
        assert!(json.contains("\"currentValue\""));

        let bucket = ReportEntry::Unspent { target_ratio: 30.0 };
        let json = serde_json::to_string(&bucket).unwrap();
        assert!(json.contains("\"kind\":\"unspent\""));
        assert!(json.contains("\"targetRatio\":30.0"));
    }

    #[test]
    fn serde_roundtrip_both_variants() {
        let entries = vec![
            ReportEntry::Holding(Position::new("Gold", 10_000.0, 10.0)),
            ReportEntry::Unspent { target_ratio: -5.0 },
        ];
        let json = serde_json::to_string(&entries).unwrap();
        let back: Vec<ReportEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MonthlyStrategyEntry & RebalanceReport
// ═══════════════════════════════════════════════════════════════════

mod strategy {
    use super::*;

    #[test]
    fn month_action_serializes_with_camel_case_fields() {
        let action = MonthAction {
            position_name: "MSCI World".into(),
            kind: ActionKind::Buy,
            amount: 800.0,
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"positionName\""));
        assert!(json.contains("\"buy\""));
    }

    #[test]
    fn entry_serde_roundtrip() {
        let entry = MonthlyStrategyEntry {
            month: 3,
            portfolio_value: 103_000.0,
            actions: vec![MonthAction {
                position_name: "Gold".into(),
                kind: ActionKind::Buy,
                amount: 1_000.0,
            }],
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: MonthlyStrategyEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}

mod report {
    use super::*;

    fn empty_report() -> RebalanceReport {
        RebalanceReport {
            results: Vec::new(),
            total_current_value: 0.0,
            target_total: 0.0,
            total_months: 0,
            has_unspent: false,
            monthly_strategy: Vec::new(),
        }
    }

    #[test]
    fn invested_savings_is_zero_without_a_plan() {
        assert_eq!(empty_report().invested_savings(), 0.0);
    }

    #[test]
    fn invested_savings_sums_every_buy_across_months() {
        let mut report = empty_report();
        report.monthly_strategy = vec![
            MonthlyStrategyEntry {
                month: 1,
                portfolio_value: 1_000.0,
                actions: vec![
                    MonthAction {
                        position_name: "A".into(),
                        kind: ActionKind::Buy,
                        amount: 600.0,
                    },
                    MonthAction {
                        position_name: "B".into(),
                        kind: ActionKind::Buy,
                        amount: 400.0,
                    },
                ],
            },
            MonthlyStrategyEntry {
                month: 2,
                portfolio_value: 2_000.0,
                actions: vec![MonthAction {
                    position_name: "A".into(),
                    kind: ActionKind::Buy,
                    amount: 1_000.0,
                }],
            },
        ];
        assert!((report.invested_savings() - 2_000.0).abs() < 1e-9);
    }
}
