//! Simulation report generation.

use super::runner::RunStats;
use crate::core::game_state::PhaseKind;
use serde::Serialize;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub ticks_per_run: u64,

    pub avg_max_level: f64,
    pub deepest_level: u32,
    pub avg_bosses_defeated: f64,
    pub avg_party_wipes: f64,
    pub avg_encounters_won: f64,
    pub avg_items_equipped: f64,
    /// Share of all ticks spent in each phase, indexed like [`PhaseKind::ALL`]
    pub phase_share: [f64; 4],
    pub clamp_violations: u64,

    pub runs: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, ticks_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;
        let n = (num_runs as f64).max(1.0);
        let avg = |f: fn(&RunStats) -> f64| runs.iter().map(f).sum::<f64>() / n;

        let total_ticks: u64 = runs.iter().map(|r| r.total_ticks).sum();
        let mut phase_share = [0.0; 4];
        if total_ticks > 0 {
            for (i, share) in phase_share.iter_mut().enumerate() {
                let ticks: u64 = runs.iter().map(|r| r.phase_ticks[i]).sum();
                *share = ticks as f64 / total_ticks as f64;
            }
        }

        Self {
            num_runs,
            ticks_per_run,
            avg_max_level: avg(|r| r.max_level as f64),
            deepest_level: runs.iter().map(|r| r.max_level).max().unwrap_or(1),
            avg_bosses_defeated: avg(|r| r.bosses_defeated as f64),
            avg_party_wipes: avg(|r| r.party_wipes as f64),
            avg_encounters_won: avg(|r| r.encounters_won as f64),
            avg_items_equipped: avg(|r| r.items_equipped as f64),
            phase_share,
            clamp_violations: runs.iter().map(|r| r.clamp_violations).sum(),
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} x {} ticks\n\n",
            self.num_runs, self.ticks_per_run
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Max Level:       {:.1}\n", self.avg_max_level));
        report.push_str(&format!("  Deepest Level:       {}\n", self.deepest_level));
        report.push_str(&format!(
            "  Avg Bosses Defeated: {:.1}\n",
            self.avg_bosses_defeated
        ));
        report.push_str(&format!("  Avg Party Wipes:     {:.1}\n", self.avg_party_wipes));
        report.push_str(&format!(
            "  Avg Encounters Won:  {:.1}\n\n",
            self.avg_encounters_won
        ));

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Items Equipped:  {:.1}\n\n",
            self.avg_items_equipped
        ));

        report.push_str("── TIME PER PHASE ───────────────────────────────────────────────\n");
        for (kind, share) in PhaseKind::ALL.iter().zip(self.phase_share.iter()) {
            report.push_str(&format!("  {:<20} {:>5.1}%\n", kind.name(), share * 100.0));
        }

        if self.clamp_violations > 0 {
            report.push_str(&format!(
                "\n  ⚠️  {} ticks left hp/mp out of bounds\n",
                self.clamp_violations
            ));
        }
        if self.avg_party_wipes > self.avg_encounters_won && self.num_runs > 0 {
            report.push_str("\n  ⚠️  More wipes than wins - enemy scaling too steep?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(level: u32, wipes: u64, ticks: [u64; 4]) -> RunStats {
        RunStats {
            max_level: level,
            bosses_defeated: (level - 1) as u64,
            party_wipes: wipes,
            encounters_won: 10,
            ambushes: 9,
            items_equipped: 4,
            total_ticks: ticks.iter().sum(),
            phase_ticks: ticks,
            clamp_violations: 0,
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![run(3, 1, [50, 30, 15, 5]), run(5, 3, [60, 20, 15, 5])];
        let report = SimReport::from_runs(runs, 100);
        assert_eq!(report.num_runs, 2);
        assert!((report.avg_max_level - 4.0).abs() < 1e-9);
        assert_eq!(report.deepest_level, 5);
        assert!((report.avg_party_wipes - 2.0).abs() < 1e-9);
        assert!((report.phase_share[0] - 0.55).abs() < 1e-9);
        assert!((report.phase_share.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("Deepest Level:       5"));
        assert!(!text.contains("out of bounds"));
    }

    #[test]
    fn test_empty_report_has_no_nan() {
        let report = SimReport::from_runs(Vec::new(), 10);
        assert_eq!(report.avg_max_level, 0.0);
        assert_eq!(report.deepest_level, 1);
        assert!(report.phase_share.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_json_report() {
        let report = SimReport::from_runs(vec![run(2, 0, [1, 1, 1, 1])], 4);
        let json = report.to_json();
        assert!(json.is_ok());
        let value: serde_json::Value =
            serde_json::from_str(&json.unwrap_or_default()).unwrap_or_default();
        assert_eq!(value["deepest_level"], 2);
        assert_eq!(value["runs"].as_array().map(|a| a.len()), Some(1));
    }
}
