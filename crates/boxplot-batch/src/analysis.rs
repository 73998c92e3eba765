//! Per-group level analysis
//!
//! A group is estimated at its worst level: if any complete situation only
//! reports quartiles, every situation in the group is estimated from quartiles
//! so the results stay comparable across situations.

use crate::input::{GroupData, Situation};
use boxplot_core::DataLevel;
use serde::Serialize;

/// Level analysis of a single situation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SituationAnalysis {
    /// 1-based position within the group
    pub index: usize,
    pub name: String,
    pub data_level: DataLevel,
    pub available_fields: Vec<&'static str>,
}

impl SituationAnalysis {
    fn new(index: usize, situation: &Situation) -> Self {
        Self {
            index: index + 1,
            name: situation.name.clone(),
            data_level: situation.data_level(),
            available_fields: situation.available_fields(),
        }
    }
}

/// Level analysis of a whole group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAnalysis {
    pub name: String,
    pub situations: Vec<SituationAnalysis>,
    /// Worst level over the complete situations, `Incomplete` when there are none
    pub min_level: DataLevel,
    /// Some complete situation had more detail than `min_level`
    pub conservative_strategy: bool,
}

impl GroupAnalysis {
    pub fn situation_count(&self) -> usize {
        self.situations.len()
    }

    /// Complete situations sitting at `min_level`
    pub fn lowest_level_situations(&self) -> impl Iterator<Item = &SituationAnalysis> + '_ {
        self.situations
            .iter()
            .filter(move |s| s.data_level.is_complete() && s.data_level == self.min_level)
    }
}

/// Analyze one group
pub fn analyze_group(group: &GroupData) -> GroupAnalysis {
    let situations: Vec<SituationAnalysis> = group
        .situations
        .iter()
        .enumerate()
        .map(|(i, s)| SituationAnalysis::new(i, s))
        .collect();

    let complete_levels = || {
        situations
            .iter()
            .map(|s| s.data_level)
            .filter(|level| level.is_complete())
    };
    let min_level = complete_levels().min().unwrap_or(DataLevel::Incomplete);
    let conservative_strategy = complete_levels().any(|level| level > min_level);

    GroupAnalysis {
        name: group.name.clone(),
        situations,
        min_level,
        conservative_strategy,
    }
}

/// Analyze every group, preserving input order
pub fn analyze_levels(groups: &[GroupData]) -> Vec<GroupAnalysis> {
    groups.iter().map(analyze_group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxplot_core::BoxplotSummary;

    fn group() -> GroupData {
        GroupData::new("Treatment")
            .with_situation(Situation::new(
                "Baseline",
                BoxplotSummary::new(10.0, 15.0, 20.0).with_whiskers(5.0, 25.0),
                30,
            ))
            .with_situation(Situation::new("Week 4", BoxplotSummary::new(8.0, 12.0, 16.0), 28))
            .with_situation(Situation::without_sample_size(
                "Week 8",
                BoxplotSummary::new(7.0, 10.0, 13.0),
            ))
    }

    #[test]
    fn test_worst_level_ignores_incomplete() {
        let analysis = analyze_group(&group());

        assert_eq!(analysis.situation_count(), 3);
        assert_eq!(analysis.situations[0].index, 1);
        assert_eq!(analysis.situations[2].data_level, DataLevel::Incomplete);
        assert_eq!(analysis.min_level, DataLevel::QuartilesOnly);
        assert!(analysis.conservative_strategy);

        let lowest: Vec<_> = analysis.lowest_level_situations().map(|s| s.name.as_str()).collect();
        assert_eq!(lowest, vec!["Week 4"]);
    }

    #[test]
    fn test_uniform_group_is_not_conservative() {
        let group = GroupData::new("Control")
            .with_situation(Situation::new("A", BoxplotSummary::new(1.0, 2.0, 3.0), 10))
            .with_situation(Situation::new("B", BoxplotSummary::new(2.0, 3.0, 4.0), 10));
        let analysis = analyze_group(&group);
        assert_eq!(analysis.min_level, DataLevel::QuartilesOnly);
        assert!(!analysis.conservative_strategy);
    }

    #[test]
    fn test_group_without_complete_situations() {
        let group = GroupData::new("Empty").with_situation(Situation::without_sample_size(
            "A",
            BoxplotSummary::new(1.0, 2.0, 3.0),
        ));
        let analysis = analyze_group(&group);
        assert_eq!(analysis.min_level, DataLevel::Incomplete);
        assert!(!analysis.conservative_strategy);

        let analysis = analyze_group(&GroupData::new("None"));
        assert_eq!(analysis.min_level, DataLevel::Incomplete);
    }

    #[test]
    fn test_analyze_levels_preserves_order() {
        let groups = vec![group(), GroupData::new("Control")];
        let names: Vec<_> = analyze_levels(&groups).into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Treatment", "Control"]);
    }
}
