//! The site's routes and the sections each one is built from.
//!
//! ```text
//! /              hero, problem, blueprint, solution, pipeline, features, demo, cta
//! /demo          header, video (media switch), facts
//! /about         prose
//! /architecture  intro, layers, outro
//! ```

use crate::config::SiteConfig;
use crate::layout::LayoutTemplate;
use crate::media::MediaConfiguration;
use crate::page::{
    PageDefinition, SectionDescriptor, SectionError, SectionHeading, escape_markdown, in_section,
};
use crate::registry;

/// Every page of the site, in route order.
///
/// `media` is the demo page's video configuration; everything else comes from
/// the content registry and `config.site`.
pub fn site_pages(
    config: &SiteConfig,
    media: &MediaConfiguration,
) -> Result<Vec<PageDefinition>, SectionError> {
    Ok(vec![
        home_page(config)?,
        demo_page(config, media)?,
        about_page(config),
        architecture_page(config)?,
    ])
}

fn page_title(config: &SiteConfig, name: &str) -> String {
    format!("{name} · {}", config.site.product)
}

pub fn home_page(config: &SiteConfig) -> Result<PageDefinition, SectionError> {
    let product = config.site.product.as_str();

    let hero = SectionDescriptor::collection(
        "hero",
        SectionHeading::new(&["AUTONOMOUS", "PRE-CONSTRUCTION", "INTELLIGENCE"])
            .eyebrow("Pre-Construction AI Platform")
            .lede(
                "Transform civil engineering blueprints into executable, optimized, \
                 and explainable construction strategies — before a single brick is laid.",
            )
            .action("Request Demo", "#cta", true)
            .action("Watch Overview", "/demo", false),
        registry::hero_metrics().map_err(in_section("hero"))?,
        LayoutTemplate::stat_strip(),
    )?;

    let problem = SectionDescriptor::collection(
        "problem",
        SectionHeading::new(&["WHY PRE-CONSTRUCTION", "FAILS"])
            .eyebrow("The Problem")
            .lede(
                "The construction industry loses $1.8 trillion annually to rework, \
                 delays, and planning failures. It doesn't have to be this way.",
            ),
        registry::problems().map_err(in_section("problem"))?,
        LayoutTemplate::feature_grid(2),
    )?;

    let blueprint = SectionDescriptor::collection(
        "blueprint",
        SectionHeading::new(&["THE BLUEPRINT", "OF YOUR PROJECT"])
            .eyebrow("Sheet AR-401 — Intelligence Architecture"),
        registry::blueprint_stats().map_err(in_section("blueprint"))?,
        LayoutTemplate::metric_grid(4),
    )?;

    let solution = SectionDescriptor::collection(
        "solution",
        SectionHeading::new(&["DETERMINISTIC", "INTELLIGENCE"])
            .eyebrow("The Solution")
            .lede(&format!(
                "{product} replaces guesswork with engineering-grade analysis. \
                 Every output is traceable, explainable, and optimizable."
            )),
        registry::solution_points().map_err(in_section("solution"))?,
        LayoutTemplate::point_list(),
    )?;

    let pipeline = SectionDescriptor::collection(
        "pipeline",
        SectionHeading::new(&["FROM BLUEPRINT", "TO STRATEGY"])
            .eyebrow("The Pipeline")
            .lede(
                "Nine stages of deterministic analysis — transforming raw drawings \
                 into a complete, executable construction intelligence report.",
            ),
        registry::pipeline_stages().map_err(in_section("pipeline"))?,
        LayoutTemplate::step_grid(3).highlight(registry::CORE_METRIC_STAGE, Some("Core Metric")),
    )?;

    let features = SectionDescriptor::collection(
        "features",
        SectionHeading::new(&["BUILT FOR", "ENGINEERS"])
            .eyebrow("Capabilities")
            .lede(
                "Six core capabilities that replace months of manual planning \
                 with hours of automated, verifiable intelligence.",
            ),
        registry::features().map_err(in_section("features"))?,
        LayoutTemplate::feature_grid(3),
    )?;

    let demo = SectionDescriptor::collection(
        "demo",
        SectionHeading::new(&["SEE IT", "IN ACTION"])
            .eyebrow("Demo Walkthrough")
            .lede(
                "From raw blueprint to full construction intelligence report in four steps. \
                 No setup. No training data. No cloud dependency.",
            )
            .action("Request a Live Demo", "#cta", true),
        registry::demo_steps().map_err(in_section("demo"))?,
        LayoutTemplate::step_list().highlight(1, None),
    )?;

    let results = SectionDescriptor::collection(
        "demo-results",
        SectionHeading::default(),
        registry::demo_results().map_err(in_section("demo-results"))?,
        LayoutTemplate::metric_grid(2),
    )?;

    let accuracy = SectionDescriptor::collection(
        "demo-accuracy",
        SectionHeading::default().eyebrow("Analysis Confidence"),
        registry::demo_accuracy().map_err(in_section("demo-accuracy"))?,
        LayoutTemplate::bar_chart(),
    )?;

    let cta = SectionDescriptor::collection(
        "cta",
        SectionHeading::new(&["TRANSFORM", "PRE-CONSTRUCTION", "PLANNING"])
            .eyebrow("Ready to start")
            .lede(
                "Join engineering teams who are replacing manual guesswork with \
                 deterministic, explainable construction intelligence.",
            ),
        registry::trust_points().map_err(in_section("cta"))?,
        LayoutTemplate::point_list(),
    )?;

    Ok(PageDefinition::new(
        "/",
        &config.site.title,
        vec![
            hero, problem, blueprint, solution, pipeline, features, demo, results, accuracy, cta,
        ],
    ))
}

/// The demo page: the one route whose content depends on the media switch.
pub fn demo_page(
    config: &SiteConfig,
    media: &MediaConfiguration,
) -> Result<PageDefinition, SectionError> {
    let product = config.site.product.to_uppercase();
    let lede = format!(
        "Watch how {} converts a raw civil blueprint into a full \
         construction intelligence report — in minutes.",
        escape_markdown(&config.site.product)
    );

    let header = SectionDescriptor::prose(
        "demo-header",
        SectionHeading::new(&["SEE", product.as_str(), "IN ACTION"]).eyebrow("Product Demo"),
        &[lede.as_str()],
    );

    let video = SectionDescriptor::media("video", SectionHeading::default(), media.clone());

    let facts = SectionDescriptor::collection(
        "demo-facts",
        SectionHeading::default(),
        registry::demo_facts().map_err(in_section("demo-facts"))?,
        LayoutTemplate::metric_grid(3),
    )?;

    Ok(PageDefinition::new(
        "/demo",
        &page_title(config, "Demo"),
        vec![header, video, facts],
    ))
}

pub fn about_page(config: &SiteConfig) -> PageDefinition {
    let product = &config.site.product;
    let title = format!("About {product}");
    let team = format!(
        "{} is built by a multidisciplinary engineering team focused on \
         construction intelligence, systems design, and AI-assisted decision modeling.",
        escape_markdown(product)
    );
    let about = SectionDescriptor::prose(
        "about",
        SectionHeading::new(&[title.as_str()]),
        &[
            team.as_str(),
            "Our mission is to transform pre-construction planning into a **deterministic**, \
             **explainable**, and **optimizable** process.",
        ],
    );
    PageDefinition::new("/about", &page_title(config, "About"), vec![about])
}

pub fn architecture_page(config: &SiteConfig) -> Result<PageDefinition, SectionError> {
    let summary = format!(
        "{} follows a deterministic graph-based execution intelligence architecture.",
        escape_markdown(&config.site.product)
    );
    let intro = SectionDescriptor::prose(
        "architecture-intro",
        SectionHeading::new(&["Technical Architecture"]),
        &[summary.as_str()],
    );
    let layers = SectionDescriptor::collection(
        "architecture-layers",
        SectionHeading::default(),
        registry::architecture_layers().map_err(in_section("architecture-layers"))?,
        LayoutTemplate::point_list(),
    )?;
    let outro = SectionDescriptor::prose(
        "architecture-outro",
        SectionHeading::default(),
        &["Core engineering logic is fully algorithmic. AI is used strictly for \
           explanation and strategic reasoning — never for computation."],
    );
    Ok(PageDefinition::new(
        "/architecture",
        &page_title(config, "Architecture"),
        vec![intro, layers, outro],
    ))
}
