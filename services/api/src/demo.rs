use crate::infra::standard_service;
use autogenius::error::AppError;
use autogenius::workflows::recommendations::questionnaire::DEFAULT_BUDGET;
use autogenius::workflows::recommendations::{
    format_usd, BudgetRange, ComparisonTable, FuelPreference, MaintenancePriority, Questionnaire,
    QuestionnaireError, QuestionnaireEvent, QuestionnaireStep, RecommendationReport, UsageIntent,
    UserPreferences, Vehicle, VehicleCategory,
};
use clap::Args;
use std::fmt::Write;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Lower budget bound in whole dollars (multiple of 5000)
    #[arg(long, default_value_t = DEFAULT_BUDGET.0)]
    pub(crate) budget_min: u32,
    /// Upper budget bound in whole dollars (multiple of 5000)
    #[arg(long, default_value_t = DEFAULT_BUDGET.1)]
    pub(crate) budget_max: u32,
    /// Preferred body type; repeat for several. Omit to consider every type.
    #[arg(long = "type")]
    pub(crate) car_types: Vec<VehicleCategory>,
    /// Primary usage; repeat for several
    #[arg(long)]
    pub(crate) usage: Vec<UsageIntent>,
    /// Fuel preference: any, electric, hybrid, or gas
    #[arg(long, default_value = "any")]
    pub(crate) fuel: FuelPreference,
    /// Maintenance priority: low, balanced, or performance
    #[arg(long, default_value = "balanced")]
    pub(crate) maintenance: MaintenancePriority,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Append the side-by-side comparison table
    #[arg(long)]
    pub(crate) compare: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Append a comparison table to each profile with results
    #[arg(long)]
    pub(crate) compare: bool,
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let service = standard_service();
    println!("Showroom catalog ({} vehicles)", service.catalog().len());
    for vehicle in service.catalog() {
        println!("{}", render_catalog_line(vehicle));
    }
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let json = args.json;
    let compare = args.compare;
    let questionnaire = Questionnaire::replay(questionnaire_events(&args))?;
    let step = questionnaire.step();
    let preferences =
        questionnaire
            .into_preferences()
            .ok_or(QuestionnaireError::InvalidTransition {
                from: step,
                to: QuestionnaireStep::Submitted,
            })?;

    let service = standard_service();
    let report = service.report(&preferences);

    if json {
        let payload = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{payload}");
        return Ok(());
    }

    print!("{}", render_report(&report));
    if compare && !report.is_empty() {
        print!(
            "{}",
            render_comparison(&ComparisonTable::from_recommendations(
                &report.recommendations
            ))
        );
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = standard_service();
    println!("AutoGenius recommendation demo");

    for (title, preferences) in demo_profiles()? {
        println!("\n== {title}");
        let report = service.report(&preferences);
        print!("{}", render_report(&report));
        if args.compare && !report.is_empty() {
            print!(
                "{}",
                render_comparison(&ComparisonTable::from_recommendations(
                    &report.recommendations
                ))
            );
        }
    }
    Ok(())
}

/// Translates flag answers into the questionnaire interactions a shopper would make.
fn questionnaire_events(args: &RecommendArgs) -> Vec<QuestionnaireEvent> {
    let mut car_types = args.car_types.clone();
    car_types.sort();
    car_types.dedup();
    let mut usage = args.usage.clone();
    usage.sort();
    usage.dedup();

    let mut events = vec![QuestionnaireEvent::SetBudget {
        min: args.budget_min,
        max: args.budget_max,
    }];
    events.extend(
        car_types
            .into_iter()
            .map(|car_type| QuestionnaireEvent::ToggleCarType { car_type }),
    );
    events.push(QuestionnaireEvent::Continue);
    events.extend(
        usage
            .into_iter()
            .map(|usage| QuestionnaireEvent::ToggleUsage { usage }),
    );
    events.push(QuestionnaireEvent::SetFuel { fuel: args.fuel });
    events.push(QuestionnaireEvent::Continue);
    events.push(QuestionnaireEvent::SetMaintenance {
        priority: args.maintenance,
    });
    events.push(QuestionnaireEvent::Submit);
    events
}

fn profile(
    min: u32,
    max: u32,
    car_types: &[VehicleCategory],
    fuel: FuelPreference,
) -> Result<UserPreferences, AppError> {
    Ok(UserPreferences::new(
        BudgetRange::new(min, max)?,
        car_types.iter().copied(),
        Vec::new(),
        fuel,
        MaintenancePriority::Balanced,
    ))
}

fn demo_profiles() -> Result<Vec<(&'static str, UserPreferences)>, AppError> {
    Ok(vec![
        (
            "Open brief, full budget",
            profile(20_000, 250_000, &[], FuelPreference::Any)?,
        ),
        (
            "Upper-midrange budget",
            profile(85_000, 130_000, &[], FuelPreference::Any)?,
        ),
        (
            "Electric only",
            profile(20_000, 250_000, &[], FuelPreference::Electric)?,
        ),
        (
            "Sports car shopper",
            profile(20_000, 250_000, &[VehicleCategory::Sport], FuelPreference::Any)?,
        ),
        (
            "Budget below the showroom",
            profile(20_000, 25_000, &[], FuelPreference::Any)?,
        ),
    ])
}

fn render_catalog_line(vehicle: &Vehicle) -> String {
    format!(
        "- [{}] {} | {} | {} | {:.1}/10",
        vehicle.id,
        vehicle.display_name(),
        vehicle.category.label(),
        format_usd(vehicle.price),
        vehicle.rating
    )
}

pub(crate) fn render_report(report: &RecommendationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.headline);
    let _ = writeln!(
        out,
        "Budget {} | Types {} | Usage {} | Fuel {} | Maintenance {}",
        report.preferences.budget,
        report.preferences.types,
        report.preferences.usage,
        report.preferences.fuel,
        report.preferences.maintenance
    );

    for (rank, entry) in report.recommendations.iter().enumerate() {
        let badge = entry
            .badge
            .map(|badge| format!(" [{}]", badge.label()))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{}. {} - {} - {:.1}/10{}",
            rank + 1,
            entry.vehicle.display_name(),
            format_usd(entry.vehicle.price),
            entry.vehicle.rating,
            badge
        );
    }
    out
}

pub(crate) fn render_comparison(table: &ComparisonTable) -> String {
    const LABEL_WIDTH: usize = 12;
    const CELL_WIDTH: usize = 26;

    let mut out = String::new();
    let _ = write!(out, "{:<width$}", "", width = LABEL_WIDTH);
    for column in &table.columns {
        let _ = write!(out, " | {:<width$}", column.title, width = CELL_WIDTH);
    }
    out.push('\n');
    for row in &table.rows {
        let _ = write!(out, "{:<width$}", row.label, width = LABEL_WIDTH);
        for value in &row.values {
            let _ = write!(out, " | {:<width$}", value, width = CELL_WIDTH);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(min: u32, max: u32) -> RecommendArgs {
        RecommendArgs {
            budget_min: min,
            budget_max: max,
            car_types: Vec::new(),
            usage: Vec::new(),
            fuel: FuelPreference::Any,
            maintenance: MaintenancePriority::Balanced,
            json: false,
            compare: false,
        }
    }

    #[test]
    fn repeated_flags_do_not_untoggle_selections() {
        let mut answers = args(50_000, 100_000);
        answers.car_types = vec![VehicleCategory::Electric, VehicleCategory::Electric];

        let preferences = Questionnaire::replay(questionnaire_events(&answers))
            .expect("replays")
            .into_preferences()
            .expect("submitted");

        assert!(preferences
            .car_types()
            .contains(&VehicleCategory::Electric));
        assert_eq!(preferences.budget().min(), 50_000);
    }

    #[test]
    fn misaligned_budget_is_rejected() {
        let result = Questionnaire::replay(questionnaire_events(&args(52_500, 100_000)));
        assert!(result.is_err());
    }

    #[test]
    fn demo_profiles_cover_empty_and_single_results() {
        let service = standard_service();
        let counts: Vec<usize> = demo_profiles()
            .expect("profiles build")
            .iter()
            .map(|(_, preferences)| service.report(preferences).count)
            .collect();
        assert_eq!(counts, vec![5, 3, 2, 1, 0]);
    }

    #[test]
    fn report_rendering_marks_badges() {
        let service = standard_service();
        let preferences =
            UserPreferences::with_budget(BudgetRange::new(20_000, 250_000).expect("valid"));
        let rendered = render_report(&service.report(&preferences));

        assert!(rendered.contains("1. Porsche 911 Carrera S - $124,200 - 9.8/10 [Best Overall]"));
        assert!(rendered.contains("[Best Value]"));
        assert!(!rendered.contains("[Premium Choice]"));
    }

    #[test]
    fn comparison_rendering_lists_every_row() {
        let service = standard_service();
        let preferences =
            UserPreferences::with_budget(BudgetRange::new(20_000, 250_000).expect("valid"));
        let report = service.report(&preferences);
        let rendered = render_comparison(&ComparisonTable::from_recommendations(
            &report.recommendations,
        ));

        assert_eq!(rendered.lines().count(), 8);
        assert!(rendered.contains("$89,990"));
    }
}
