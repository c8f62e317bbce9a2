//! Literal content for every section of the site.
//!
//! One function per content domain, each returning a validated collection.
//! The numbers here are marketing copy, not computed values.

use crate::content::{
    ConfigurationError, ContentCollection, FeatureRecord, MetricRecord, StepRecord,
};

type Collection<R> = Result<ContentCollection<R>, ConfigurationError>;

/// Stats bar under the hero headline.
pub fn hero_metrics() -> Collection<MetricRecord> {
    ContentCollection::new(vec![
        MetricRecord::new("Blueprint Accuracy", "95%"),
        MetricRecord::new("Faster Planning", "2×"),
        MetricRecord::new("Conflict Reduction", "60%"),
        MetricRecord::new("Algorithmic Core", "100%"),
    ])
}

pub fn problems() -> Collection<FeatureRecord> {
    ContentCollection::new(vec![
        FeatureRecord::new(
            "Sequencing Errors",
            "Manual dependency management leads to cascading sequencing failures that delay entire projects.",
        ),
        FeatureRecord::new(
            "Cost Overruns",
            "Poor pre-construction planning causes average cost overruns of 28% on large civil projects.",
        ),
        FeatureRecord::new(
            "Late Conflict Detection",
            "Clashes between structural, MEP, and civil elements are only found once work has already begun.",
        ),
        FeatureRecord::new(
            "Unsystematic Risk",
            "Risk simulation is rarely systematic — decisions are made on gut feel, not engineering data.",
        ),
    ])
}

/// Figures printed under the blueprint sheet.
pub fn blueprint_stats() -> Collection<MetricRecord> {
    ContentCollection::new(vec![
        MetricRecord::new("Nodes Extracted", "1,240").with_caption("elements"),
        MetricRecord::new("Dependencies Mapped", "3,871").with_caption("edges"),
        MetricRecord::new("Conflicts Flagged", "3").with_caption("before construction"),
        MetricRecord::new("Strategies Generated", "4").with_caption("execution plans"),
    ])
}

pub fn solution_points() -> Collection<FeatureRecord> {
    ContentCollection::new(vec![
        FeatureRecord::point("Converts static blueprints into a Digital Structural Twin"),
        FeatureRecord::point("Models dependencies using deterministic graph intelligence"),
        FeatureRecord::point("Generates multiple optimized execution strategies"),
        FeatureRecord::point("Simulates risk propagation across the structural graph"),
        FeatureRecord::point("Produces a Buildability Score™ for executive decisions"),
    ])
}

/// The nine stages from blueprint to report.
pub fn pipeline_stages() -> Collection<StepRecord> {
    ContentCollection::new(vec![
        StepRecord::new(
            1,
            "Blueprint Ingestion",
            "Upload any civil, structural, or MEP blueprint. Automatic parsing and element extraction.",
        ),
        StepRecord::new(
            2,
            "Digital Structural Twin",
            "Every structural element becomes a node. Relationships become edges in a live dependency graph.",
        ),
        StepRecord::new(
            3,
            "Dependency Intelligence",
            "Graph analysis maps every dependency — spatial, temporal, and logical.",
        ),
        StepRecord::new(
            4,
            "Execution Strategies",
            "Critical Path, Parallel, and Hybrid execution plans are generated and ranked automatically.",
        ),
        StepRecord::new(
            5,
            "Conflict Detection",
            "Curing clashes, task overlaps, and workforce overloads are flagged before work begins.",
        ),
        StepRecord::new(
            6,
            "Risk Simulation",
            "Delay propagation modeled across the entire graph. Quantified risk at every node.",
        ),
        StepRecord::new(
            7,
            "Buildability Score™",
            "A single executive metric — 0 to 100 — expressing the structural viability of the plan.",
        ),
        StepRecord::new(
            8,
            "What-If Optimization",
            "Adjust workforce, timelines, and constraints. Instantly recalculate outcomes.",
        ),
        StepRecord::new(
            9,
            "AI Explanation",
            "Local LLM provides plain-English reasoning for every decision. Fully transparent.",
        ),
    ])
}

/// Position of the Buildability Score stage, highlighted in the pipeline grid.
pub const CORE_METRIC_STAGE: usize = 7;

pub fn features() -> Collection<FeatureRecord> {
    ContentCollection::new(vec![
        FeatureRecord::new(
            "Conflict Detection",
            "Automatically surface curing conflicts, task overlaps, and workforce overload conditions before they become field problems.",
        )
        .tagged("Real-time"),
        FeatureRecord::new(
            "Buildability Score™",
            "A single 0–100 executive metric derived from deterministic structural risk modeling. No black boxes. Fully explainable.",
        )
        .tagged("Proprietary"),
        FeatureRecord::new(
            "What-If Simulation",
            "Adjust workforce allocation, timelines, and constraints. Execution outcomes are recalculated instantly across the entire graph.",
        )
        .tagged("Interactive"),
        FeatureRecord::new(
            "Dependency Graphs",
            "Every structural element mapped as a network node, with full topological analysis of your construction sequence.",
        )
        .tagged("Graph Core"),
        FeatureRecord::new(
            "Explainable AI",
            "A local LLM provides structured, transparent reasoning for every strategic recommendation. No cloud. No guesswork.",
        )
        .tagged("Local LLM"),
        FeatureRecord::new(
            "Digital Structural Twin",
            "A live computational mirror of your entire structure. Every element, relationship, and constraint — modeled before construction starts.",
        )
        .tagged("Core Tech"),
    ])
}

/// Four-step walkthrough in the home page demo section.
pub fn demo_steps() -> Collection<StepRecord> {
    ContentCollection::new(vec![
        StepRecord::new(1, "Upload Blueprint", "Drag in any PDF, DWG, or IFC file."),
        StepRecord::new(
            2,
            "Generate Digital Twin",
            "Structural elements and relationships are automatically extracted.",
        ),
        StepRecord::new(
            3,
            "Run Intelligence Analysis",
            "Dependency graph, conflicts, risk scores — all computed in minutes.",
        ),
        StepRecord::new(
            4,
            "Receive Buildability Report",
            "Full strategy comparison, score, and AI explanation delivered instantly.",
        ),
    ])
}

pub fn demo_results() -> Collection<MetricRecord> {
    ContentCollection::new(vec![
        MetricRecord::new("Blueprint Accuracy", "95%").with_caption("vs. manual parsing"),
        MetricRecord::new("Conflicts Found", "12×").with_caption("more than visual review"),
        MetricRecord::new("Planning Time", "−70%").with_caption("average reduction"),
        MetricRecord::new("Buildability Score", "87.4").with_caption("example project"),
    ])
}

pub fn demo_accuracy() -> Collection<MetricRecord> {
    ContentCollection::new(vec![
        MetricRecord::percentage("Structural Integrity Analysis", 92),
        MetricRecord::percentage("Dependency Resolution", 96),
        MetricRecord::percentage("Conflict Detection Coverage", 88).with_accent("#60A5FA"),
        MetricRecord::percentage("Risk Propagation Accuracy", 94),
        MetricRecord::percentage("Buildability Score Reliability", 91).with_accent("#34D399"),
    ])
}

/// Info cards under the video on `/demo`.
pub fn demo_facts() -> Collection<MetricRecord> {
    ContentCollection::new(vec![
        MetricRecord::new("Duration", "~8 min").with_caption("Full walkthrough"),
        MetricRecord::new("Covers", "9 Stages").with_caption("End-to-end pipeline"),
        MetricRecord::new("Output", "Live Report").with_caption("Buildability Score™ + AI"),
    ])
}

pub fn trust_points() -> Collection<FeatureRecord> {
    ContentCollection::new(vec![
        FeatureRecord::point("No cloud dependency"),
        FeatureRecord::point("100% deterministic outputs"),
        FeatureRecord::point("Explainable at every step"),
    ])
}

/// Layers listed on `/architecture`, as plain points.
pub fn architecture_layers() -> Collection<FeatureRecord> {
    ContentCollection::new(vec![
        FeatureRecord::point("Blueprint Ingestion"),
        FeatureRecord::point("Digital Structural Twin Creation"),
        FeatureRecord::point("Dependency Graph Modeling (NetworkX)"),
        FeatureRecord::point("Execution Strategy Engine"),
        FeatureRecord::point("Conflict Detection Layer"),
        FeatureRecord::point("Risk Propagation Engine"),
        FeatureRecord::point("Buildability Score™"),
        FeatureRecord::point("What-If Optimization"),
        FeatureRecord::point("Explainable AI (Local LLM via Ollama)"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRecord;

    #[test]
    fn every_collection_is_valid() {
        assert_eq!(hero_metrics().unwrap().len(), 4);
        assert_eq!(problems().unwrap().len(), 4);
        assert_eq!(blueprint_stats().unwrap().len(), 4);
        assert_eq!(solution_points().unwrap().len(), 5);
        assert_eq!(pipeline_stages().unwrap().len(), 9);
        assert_eq!(features().unwrap().len(), 6);
        assert_eq!(demo_steps().unwrap().len(), 4);
        assert_eq!(demo_results().unwrap().len(), 4);
        assert_eq!(demo_accuracy().unwrap().len(), 5);
        assert_eq!(demo_facts().unwrap().len(), 3);
        assert_eq!(trust_points().unwrap().len(), 3);
        assert_eq!(architecture_layers().unwrap().len(), 9);
    }

    #[test]
    fn pipeline_ordinals_ascend() {
        let stages = pipeline_stages().unwrap();
        let ordinals: Vec<u32> = stages.iter().filter_map(|s| s.ordinal()).collect();
        assert_eq!(ordinals, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn core_metric_stage_is_buildability_score() {
        let stages = pipeline_stages().unwrap();
        assert_eq!(
            stages.records()[CORE_METRIC_STAGE - 1].title,
            "Buildability Score™"
        );
    }

    #[test]
    fn accuracy_bars_carry_meters() {
        let bars = demo_accuracy().unwrap();
        assert!(bars.iter().all(|b| b.meter.is_some()));
    }

    #[test]
    fn accuracy_bars_keep_their_colours() {
        let bars = demo_accuracy().unwrap();
        let accents: Vec<Option<&str>> = bars.iter().map(|b| b.accent()).collect();
        assert_eq!(
            accents,
            vec![None, None, Some("#60A5FA"), None, Some("#34D399")]
        );
    }

    #[test]
    fn architecture_layers_keep_qualifiers() {
        let layers = architecture_layers().unwrap();
        let titles: Vec<&str> = layers.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles[2], "Dependency Graph Modeling (NetworkX)");
        assert_eq!(titles[8], "Explainable AI (Local LLM via Ollama)");
        assert!(layers.iter().all(|l| l.description.is_none()));
    }

    #[test]
    fn every_feature_is_tagged() {
        let features = features().unwrap();
        assert!(features.iter().all(|f| f.tag.is_some()));
    }
}
