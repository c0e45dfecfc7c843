use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use jiff::{SignedDuration, Timestamp};
use quicksilver_dispatch::{
    GreedySolver,
    json::types::{JsonDispatchRequest, JsonDispatchResponse},
    problem::{
        capacity::{Capacity, add_capacities},
        coordinates::geodistance,
        meters::Meters,
        dispatch_problem::DispatchProblem,
        speed::{AVERAGE_SPEED, MetersPerSecond},
    },
    solver::{solution::Solution, solver_params::SolverParams},
};
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct SolveArgs {
    /// Dispatch request JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Response file, printed to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start time used when the request has none (default: now)
    #[arg(long, value_parser = parsers::parse_timestamp)]
    start_time: Option<Timestamp>,

    /// Average courier speed in meters per second
    #[arg(long, value_parser = parsers::parse_speed, default_value_t = AVERAGE_SPEED.value())]
    speed: f64,

    /// Include the schedule of every route
    #[arg(long)]
    schedule: bool,
}

pub fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    info!("Solving {:?}", args.input);

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {:?}", args.input))?;
    let request: JsonDispatchRequest = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {:?}", args.input))?;

    let problem = request.build_problem(args.start_time.unwrap_or_else(Timestamp::now))?;

    let solver = GreedySolver::new(SolverParams {
        average_speed: MetersPerSecond::new(args.speed),
    });
    let solution = solver.solve(&problem);

    let response = JsonDispatchResponse::from_solution(&solution, &problem, args.schedule);
    let json = serde_json::to_string_pretty(&response)?;

    let table = summary_table(&problem, &solution);

    match args.output {
        Some(output) => {
            std::fs::write(&output, json)
                .with_context(|| format!("Failed to write {output:?}"))?;
            println!("{table}");
        }
        None => {
            eprintln!("{table}");
            println!("{json}");
        }
    }

    info!(
        assigned = solution.assigned_count(),
        unassigned = solution.unassigned().len(),
        "Done"
    );

    Ok(())
}

fn summary_table(problem: &DispatchProblem, solution: &Solution) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Courier",
        "Tasks",
        "Distance (km)",
        "Load (volume / weight)",
        "Waiting",
        "Finish",
    ]);

    for route in solution.routes() {
        let courier = problem.courier(route.courier_id());

        let mut location = courier.start_point();
        let mut distance = Meters::ZERO;
        let mut load = Capacity::ZERO;
        let mut waiting = SignedDuration::ZERO;

        for visit in route.visits() {
            let task = problem.task(visit.task_id());
            distance = distance
                + geodistance(location, task.sender_point())
                + geodistance(task.sender_point(), task.recipient_point());
            location = task.recipient_point();
            load = add_capacities(Some(&load), task.capacity()).unwrap_or(load);
            waiting += visit.waiting_duration();
        }

        let finish = route
            .visits()
            .last()
            .map(|visit| visit.finish_time().to_string())
            .unwrap_or_default();

        table.add_row(vec![
            courier.external_id().to_owned(),
            route.visits().len().to_string(),
            format!("{:.2}", distance.value() / 1000.0),
            format!("{} / {}", load.volume, load.weight),
            format!("{waiting:#}"),
            finish,
        ]);
    }

    for &task_id in solution.unassigned() {
        table.add_row(vec![
            String::from("(unassigned)"),
            problem.task(task_id).external_id().to_owned(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ]);
    }

    table
}
