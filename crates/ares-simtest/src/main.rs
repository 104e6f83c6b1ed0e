//! ARES Designer Headless Validation Harness
//!
//! Validates pure design logic and data without a UI.
//! Runs entirely in-process — no rendering, no networking.
//!
//! Usage:
//!   cargo run -p ares-simtest
//!   cargo run -p ares-simtest -- --verbose

use ares_logic::catalog::ModuleKind;
use ares_logic::constants::{module_kinds, BOUNDARY_RING_SAMPLES, MIN_NHV_PER_CREW};
use ares_logic::evaluator::{evaluate, StatusTier};
use ares_logic::layout::HabitatLayout;
use ares_logic::mission::{validate_params, HabitatClass, MissionParams};
use ares_logic::placement::{CylinderBounds, FixedPlacement, PlacementStrategy, RandomPlacement};
use ares_logic::scene::build_scene;
use ares_logic::session::{apply_action, build_report, DesignAction};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

// ── Module catalog (same JSON external consumers use) ───────────────────
const CATALOG_JSON: &str = include_str!("../../../data/module_catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    kind: u8,
    volume_m3: f64,
    color: String,
    footprint_m: [f64; 3],
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== ARES Designer Validation Harness ===\n");

    let mut results = Vec::new();

    // 1. Module catalog validation
    results.extend(validate_catalog(verbose));

    // 2. Constraint evaluator sweep
    results.extend(validate_evaluator(verbose));

    // 3. Mission parameter validation
    results.extend(validate_mission_params(verbose));

    // 4. Placement bounds sweep
    results.extend(validate_placement(verbose));

    // 5. Session action loop
    results.extend(validate_session(verbose));

    // 6. Render scene data
    results.extend(validate_scene(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Module Catalog ───────────────────────────────────────────────────

fn validate_catalog(_verbose: bool) -> Vec<TestResult> {
    println!("--- Module Catalog ---");
    let mut results = Vec::new();

    let catalog: Vec<CatalogEntry> = match serde_json::from_str(CATALOG_JSON) {
        Ok(c) => c,
        Err(e) => {
            results.push(TestResult {
                name: "catalog_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "catalog_complete".into(),
        passed: catalog.len() == module_kinds::COUNT as usize,
        detail: format!("{} module kinds loaded", catalog.len()),
    });

    // Every JSON entry must match the built-in catalog exactly
    let mut mismatches = Vec::new();
    for entry in &catalog {
        match ModuleKind::from_u8(entry.kind) {
            Some(kind) => {
                let spec = kind.spec();
                if spec.name != entry.name
                    || (spec.volume_m3 - entry.volume_m3).abs() > 1e-9
                    || spec.color != entry.color
                    || spec.footprint_m != entry.footprint_m
                {
                    mismatches.push(entry.name.clone());
                }
            }
            None => mismatches.push(format!("unknown kind {}", entry.kind)),
        }
    }
    results.push(TestResult {
        name: "catalog_matches_builtin".into(),
        passed: mismatches.is_empty(),
        detail: if mismatches.is_empty() {
            "JSON catalog agrees with built-in specs".into()
        } else {
            format!("mismatched entries: {:?}", mismatches)
        },
    });

    // Crew-accommodation space should dominate the palette volume; systems
    // modules stay small
    let habitation: f64 = ModuleKind::all()
        .iter()
        .filter(|k| module_kinds::is_habitation(**k as u8))
        .map(|k| k.spec().volume_m3)
        .sum();
    let systems: f64 = ModuleKind::all()
        .iter()
        .filter(|k| module_kinds::is_systems(**k as u8))
        .map(|k| k.spec().volume_m3)
        .sum();
    let total: f64 = ModuleKind::all().iter().map(|k| k.spec().volume_m3).sum();
    results.push(TestResult {
        name: "volume_distribution".into(),
        passed: habitation > total / 2.0 && systems < habitation,
        detail: format!(
            "habitation {:.1} m³, systems {:.1} m³ of {:.1} m³ total",
            habitation, systems, total
        ),
    });

    let bad_volume: Vec<_> = catalog.iter().filter(|e| e.volume_m3 <= 0.0).collect();
    results.push(TestResult {
        name: "catalog_positive_volumes".into(),
        passed: bad_volume.is_empty(),
        detail: if bad_volume.is_empty() {
            "all modules have positive volume".into()
        } else {
            format!("{} modules with non-positive volume", bad_volume.len())
        },
    });

    results
}

// ── 2. Constraint Evaluator ─────────────────────────────────────────────

fn validate_evaluator(verbose: bool) -> Vec<TestResult> {
    println!("--- Constraint Evaluator ---");
    let mut results = Vec::new();

    // Required NHV scales linearly with crew
    let mut linear_ok = true;
    for crew in 2..=8u8 {
        let feedback = evaluate(crew, 0.0);
        if (feedback.required_nhv - MIN_NHV_PER_CREW * crew as f64).abs() > 1e-9 {
            linear_ok = false;
        }
        if verbose {
            println!("  crew {} → required {:.2} m³", crew, feedback.required_nhv);
        }
    }
    results.push(TestResult {
        name: "required_nhv_linear".into(),
        passed: linear_ok,
        detail: format!("{:.2} m³ per crew member", MIN_NHV_PER_CREW),
    });

    // Reference tier table for 4 crew
    let table = [
        (0.0, StatusTier::Empty),
        (80.0, StatusTier::Critical),
        (100.0, StatusTier::Caution),
        (120.0, StatusTier::Met),
    ];
    let mut table_ok = true;
    for (volume, expected) in table {
        let feedback = evaluate(4, volume);
        if feedback.tier != expected {
            table_ok = false;
        }
        if verbose {
            println!(
                "  4 crew, {:.0} m³ → {:.1}% {}",
                volume,
                feedback.occupied_pct,
                feedback.tier.label()
            );
        }
    }
    results.push(TestResult {
        name: "tier_reference_table".into(),
        passed: table_ok,
        detail: "0/80/100/120 m³ at 4 crew classify as EMPTY/CRITICAL/CAUTION/MET".into(),
    });

    // Monotonicity: utilization and tier rank never regress as volume grows
    let mut monotonic = true;
    for crew in 2..=8u8 {
        let mut last_pct = -1.0;
        let mut last_rank = 0u8;
        for step in 0..500 {
            let feedback = evaluate(crew, step as f64 * 0.75);
            if feedback.occupied_pct < last_pct || feedback.tier.rank() < last_rank {
                monotonic = false;
            }
            last_pct = feedback.occupied_pct;
            last_rank = feedback.tier.rank();
        }
    }
    results.push(TestResult {
        name: "evaluator_monotonic".into(),
        passed: monotonic,
        detail: "utilization and tier non-decreasing in volume for crews 2–8".into(),
    });

    // Messages carry the tier keyword
    let critical = evaluate(4, 50.0);
    let caution = evaluate(4, 100.0);
    let met = evaluate(4, 150.0);
    results.push(TestResult {
        name: "messages_name_tier".into(),
        passed: critical.message.contains("CRITICAL")
            && caution.message.contains("CAUTION")
            && met.message.contains("CONSTRAINTS MET"),
        detail: "status messages state their classification".into(),
    });

    results
}

// ── 3. Mission Parameters ───────────────────────────────────────────────

fn validate_mission_params(_verbose: bool) -> Vec<TestResult> {
    println!("--- Mission Parameters ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "default_params_valid".into(),
        passed: validate_params(&MissionParams::default()).is_empty(),
        detail: "4 crew, 4.0 m radius, Inflatable".into(),
    });

    let bad = MissionParams {
        crew_size: 1,
        radius_m: 9.0,
        habitat_class: 9,
    };
    let errors = validate_params(&bad);
    results.push(TestResult {
        name: "out_of_range_rejected".into(),
        passed: errors.len() == 3,
        detail: format!("{} errors for crew=1 radius=9.0 class=9", errors.len()),
    });

    let classes_ok = (0..3u8).all(|i| HabitatClass::from_u8(i).is_some())
        && HabitatClass::from_u8(3).is_none();
    results.push(TestResult {
        name: "habitat_classes".into(),
        passed: classes_ok,
        detail: "three construction classes, ids 0–2".into(),
    });

    results
}

// ── 4. Placement ────────────────────────────────────────────────────────

fn validate_placement(_verbose: bool) -> Vec<TestResult> {
    println!("--- Placement ---");
    let mut results = Vec::new();

    let mut contained = true;
    let mut samples = 0u32;
    for tenths in 30..=60 {
        let bounds = CylinderBounds {
            radius_m: tenths as f64 / 10.0,
            height_m: 8.0,
        };
        let mut strategy = RandomPlacement::new(StdRng::seed_from_u64(tenths as u64));
        for _ in 0..200 {
            let position = strategy.place(&bounds);
            samples += 1;
            if !bounds.contains(position) {
                contained = false;
            }
        }
    }
    results.push(TestResult {
        name: "random_placement_in_bounds".into(),
        passed: contained,
        detail: format!("{} samples across radii 3.0–6.0 m", samples),
    });

    results
}

// ── 5. Session Loop ─────────────────────────────────────────────────────

fn validate_session(verbose: bool) -> Vec<TestResult> {
    println!("--- Session Loop ---");
    let mut results = Vec::new();

    let params = MissionParams::default();
    let mut layout = HabitatLayout::new();
    let mut strategy = FixedPlacement::default();

    // Scripted session: fill with sleep quarters until the requirement is met
    let mut adds = 0;
    while build_report(&layout, &params).feedback.tier != StatusTier::Met && adds < 20 {
        if apply_action(
            &mut layout,
            DesignAction::AddModule(module_kinds::SLEEP),
            &params,
            &mut strategy,
        )
        .is_err()
        {
            break;
        }
        adds += 1;
        if verbose {
            let report = build_report(&layout, &params);
            println!(
                "  add #{:<2} → {:.1} m³, {:.0}%, {}",
                adds,
                report.occupied_volume,
                report.feedback.occupied_pct,
                report.feedback.tier.label()
            );
        }
    }
    // 115.84 / 13.96 → 9 sleep quarters to cross 100%
    results.push(TestResult {
        name: "session_reaches_met".into(),
        passed: adds == 9,
        detail: format!("{} sleep quarters to satisfy 4-crew requirement", adds),
    });

    let report = build_report(&layout, &params);
    results.push(TestResult {
        name: "report_consistent".into(),
        passed: report.manifest.len() == layout.len()
            && report.scene.markers.len() == layout.len()
            && (report.occupied_volume - layout.total_volume()).abs() < 1e-9,
        detail: format!("{} modules in manifest, markers, layout", layout.len()),
    });

    apply_action(&mut layout, DesignAction::ClearAll, &params, &mut strategy)
        .expect("clear cannot fail");
    let cleared = build_report(&layout, &params);
    results.push(TestResult {
        name: "clear_returns_to_empty".into(),
        passed: cleared.occupied_volume == 0.0 && cleared.feedback.tier == StatusTier::Empty,
        detail: "volume 0.0, tier EMPTY after clear".into(),
    });

    let rejected = apply_action(
        &mut layout,
        DesignAction::AddModule(200),
        &params,
        &mut strategy,
    );
    results.push(TestResult {
        name: "unknown_kind_rejected".into(),
        passed: rejected.is_err() && layout.is_empty(),
        detail: "kind id 200 refused, layout untouched".into(),
    });

    results
}

// ── 6. Render Scene ─────────────────────────────────────────────────────

fn validate_scene(_verbose: bool) -> Vec<TestResult> {
    println!("--- Render Scene ---");
    let mut results = Vec::new();

    let mut layout = HabitatLayout::new();
    layout.add_module(ModuleKind::Exercise, [1.0, -2.0, 0.5]);
    let bounds = CylinderBounds {
        radius_m: 5.0,
        height_m: 8.0,
    };
    let scene = build_scene(&layout, &bounds);

    results.push(TestResult {
        name: "boundary_rings_sampled".into(),
        passed: scene.floor_ring.x.len() == BOUNDARY_RING_SAMPLES
            && scene.ceiling_ring.x.len() == BOUNDARY_RING_SAMPLES
            && scene.floor_ring.z == -4.0
            && scene.ceiling_ring.z == 4.0,
        detail: format!("{} samples per ring at ±4.0 m", BOUNDARY_RING_SAMPLES),
    });

    let marker = &scene.markers[0];
    results.push(TestResult {
        name: "marker_swizzle".into(),
        passed: marker.x == 1.0 && marker.y == 0.5 && marker.z == -2.0,
        detail: "layout (x, y, z) plotted as (x, depth=z, vertical=y)".into(),
    });

    results.push(TestResult {
        name: "marker_label".into(),
        passed: marker.label == "Exercise/Rec (6.1 m³)" && marker.color == "purple",
        detail: marker.label.clone(),
    });

    results.push(TestResult {
        name: "axis_margins".into(),
        passed: (scene.axes.horizontal - 6.0).abs() < 1e-9
            && (scene.axes.vertical - 4.8).abs() < 1e-9,
        detail: "1.2× margin on both axis ranges".into(),
    });

    results
}
