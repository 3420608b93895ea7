//! MicroSocieties - Entry Point
//!
//! Interactive runner for the micro-society simulation. Societies can be
//! advanced manually (`tick`, `run`) or watched live, where a tokio timer
//! fires one turn every `2000 / speed` milliseconds until the society is
//! paused or collapses.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tokio::runtime::Runtime;

use microsocieties::being::Being;
use microsocieties::core::error::Result;
use microsocieties::core::types::SimulationSpeed;
use microsocieties::events::EventCatalog;
use microsocieties::interventions::{InterventionGate, StateStore};
use microsocieties::manager::SocietyManager;
use microsocieties::missions::NullMissionTracker;
use microsocieties::simulation::process_turn;
use microsocieties::society::MicroSociety;

/// Micro-society simulation with divine interventions
#[derive(Parser, Debug)]
#[command(name = "microsocieties")]
#[command(about = "Discrete-time micro-society simulation with divine interventions")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Event catalog TOML file (built-in catalog when omitted)
    #[arg(long)]
    events: Option<PathBuf>,

    /// Intervention state file
    #[arg(long, default_value = "divine-interventions.json")]
    state: PathBuf,

    /// Initial speed multiplier (1, 2, 5 or 10)
    #[arg(long, default_value_t = 1)]
    speed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("microsocieties=info")
        .init();

    let args = Args::parse();

    let catalog = match &args.events {
        Some(path) => EventCatalog::from_toml_file(path)?,
        None => EventCatalog::with_defaults(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "microsocieties starting");

    let rt = Runtime::new()?;

    let mut manager = SocietyManager::new();
    let society = manager.create_society("Nuevo Ser", "florecer juntos", default_cast(), seed);
    if let Some(speed) = SimulationSpeed::from_multiplier(args.speed) {
        society.set_speed(speed);
    } else {
        println!("Velocidad {} no válida; usando 1", args.speed);
    }

    let mut gate = InterventionGate::with_store(StateStore::new(&args.state));
    let mut tracker = NullMissionTracker;

    println!("\n=== MICROSOCIEDADES ===");
    println!("Simulación de sociedades en miniatura, {} eventos posibles", catalog.len());
    println!();
    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "help" || input == "h" {
            print_help();
            continue;
        }

        if input == "tick" || input == "t" {
            if let Some(society) = manager.current_mut() {
                let report = process_turn(society, &catalog, &mut tracker);
                gate.regenerate_points(society);
                print_report(&report);
            } else {
                println!("No hay sociedad seleccionada");
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("run ") {
            match rest.parse::<u64>() {
                Ok(n) => {
                    for _ in 0..n {
                        let Some(society) = manager.current_mut() else { break };
                        let report = process_turn(society, &catalog, &mut tracker);
                        gate.regenerate_points(society);
                        if report.game_over {
                            print_report(&report);
                            break;
                        }
                    }
                    if let Some(society) = manager.current() {
                        println!("Turno {} alcanzado", society.turn());
                    }
                }
                Err(_) => println!("Uso: run <turnos>"),
            }
            continue;
        }

        if input == "watch" || input.starts_with("watch ") {
            let budget = input
                .strip_prefix("watch")
                .and_then(|rest| rest.trim().parse::<u64>().ok())
                .unwrap_or(100);
            match manager.current_mut() {
                Some(society) => {
                    rt.block_on(watch(society, &catalog, &mut gate, &mut tracker, budget));
                }
                None => println!("No hay sociedad seleccionada"),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("speed ") {
            match rest.parse::<u64>().ok().and_then(SimulationSpeed::from_multiplier) {
                Some(speed) => {
                    if let Some(society) = manager.current_mut() {
                        society.set_speed(speed);
                        println!(
                            "Velocidad x{} ({} ms por turno)",
                            speed.multiplier(),
                            society.tick_interval().as_millis()
                        );
                    }
                }
                None => println!("Uso: speed <1|2|5|10>"),
            }
            continue;
        }

        if input == "status" || input == "s" {
            match manager.current() {
                Some(society) => print_status(society),
                None => println!("No hay sociedad seleccionada"),
            }
            continue;
        }

        if input == "log" || input.starts_with("log ") {
            let n = input
                .strip_prefix("log")
                .and_then(|rest| rest.trim().parse::<usize>().ok())
                .unwrap_or(10);
            if let Some(society) = manager.current() {
                for entry in society.event_log().recent(n) {
                    println!("  [{:>4}] {}", entry.turn, entry.message);
                }
            }
            continue;
        }

        if input == "societies" {
            for (i, summary) in manager.list_societies().iter().enumerate() {
                let marker = if Some(i) == manager.current_index() { "*" } else { " " };
                println!(
                    "{marker} [{i}] {} — turno {}, {} seres, salud {:.0}{}",
                    summary.name,
                    summary.turn,
                    summary.population,
                    summary.health,
                    if summary.running { ", en marcha" } else { "" }
                );
            }
            continue;
        }

        if let Some(name) = input.strip_prefix("new ") {
            let name = name.trim();
            if name.is_empty() {
                println!("Uso: new <nombre>");
            } else {
                manager.create_society(name, "florecer juntos", default_cast(), rand::random());
                println!("Sociedad '{name}' creada y seleccionada");
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("select ") {
            match rest.parse::<usize>() {
                Ok(index) => match manager.select_society(index) {
                    Some(society) => println!("Sociedad '{}' seleccionada", society.name),
                    None => println!("Índice fuera de rango"),
                },
                Err(_) => println!("Uso: select <índice>"),
            }
            continue;
        }

        if input == "interventions" || input == "i" {
            let turn = manager.current().map(|s| s.turn()).unwrap_or(0);
            println!("Puntos divinos: {}", gate.points());
            for entry in gate.catalog().iter() {
                let remaining = gate.cooldown_remaining(entry.id, turn);
                let cooldown_note = if remaining > 0 {
                    format!(" (enfriamiento: {remaining})")
                } else {
                    String::new()
                };
                println!(
                    "  {} {} [{}] — coste {}{}",
                    entry.icon, entry.name, entry.id, entry.cost, cooldown_note
                );
            }
            continue;
        }

        if input == "points" {
            println!("Puntos divinos: {}", gate.points());
            continue;
        }

        if let Some(id) = input.strip_prefix("use ") {
            match manager.current_mut() {
                Some(society) => {
                    let outcome =
                        gate.use_intervention(id.trim(), society, &catalog, &mut tracker);
                    println!("{}", outcome.message);
                }
                None => println!("No hay sociedad seleccionada"),
            }
            continue;
        }

        println!("Comando desconocido. Escribe 'help' para ver la lista.");
    }

    if let Some(society) = manager.current() {
        println!(
            "\nHasta pronto. '{}' queda en el turno {} con {} seres.",
            society.name,
            society.turn(),
            society.alive_count()
        );
    }
    Ok(())
}

/// Timer-driven watch mode: one turn per tick interval until the society
/// pauses, collapses or the turn budget runs out
async fn watch(
    society: &mut MicroSociety,
    catalog: &EventCatalog,
    gate: &mut InterventionGate,
    tracker: &mut NullMissionTracker,
    budget: u64,
) {
    society.start();
    for _ in 0..budget {
        if !society.is_running() {
            break;
        }
        // Re-read every tick so speed changes take effect immediately
        tokio::time::sleep(society.tick_interval()).await;
        let report = process_turn(society, catalog, tracker);
        gate.regenerate_points(society);
        print_report(&report);
        if report.game_over {
            break;
        }
    }
    society.pause();
}

fn print_report(report: &microsocieties::simulation::TurnReport) {
    let verdict = if report.success { "✓" } else { "✗" };
    println!(
        "[{:>4}] {} {} ({:.0}%)",
        report.turn,
        verdict,
        report.event_name,
        report.success_rate * 100.0
    );
    if report.game_over {
        println!("💥 La sociedad ha colapsado en el turno {}", report.turn);
    }
}

fn print_status(society: &MicroSociety) {
    let m = &society.metrics;
    println!("Sociedad '{}' — objetivo: {}", society.name, society.goal);
    println!(
        "  Turno {} | salud {:.0} | conocimiento {:.0} | acción {:.0} | cohesión {:.0}",
        society.turn(),
        m.health,
        m.knowledge,
        m.action,
        m.cohesion
    );
    println!("  Seres ({} vivos):", society.alive_count());
    for being in &society.beings {
        let state = if being.alive { " " } else { "✝" };
        println!(
            "   {state} {} — aptitud {:.0}, generación {}",
            being.name, being.fitness, being.generation
        );
    }
}

fn print_help() {
    println!("Comandos:");
    println!("  tick / t           - Avanzar un turno");
    println!("  run <n>            - Avanzar n turnos");
    println!("  watch [n]          - Observar en vivo a la velocidad actual");
    println!("  speed <1|2|5|10>   - Cambiar la velocidad");
    println!("  status / s         - Estado de la sociedad actual");
    println!("  log [n]            - Últimas entradas del registro");
    println!("  societies          - Listar sociedades");
    println!("  new <nombre>       - Crear una sociedad nueva");
    println!("  select <i>         - Cambiar la sociedad actual");
    println!("  interventions / i  - Catálogo de intervenciones");
    println!("  use <id>           - Usar una intervención");
    println!("  points             - Puntos divinos disponibles");
    println!("  quit / q           - Salir");
}

/// The default starting cast
fn default_cast() -> Vec<Being> {
    vec![
        Being::seed(
            "Aria Luz",
            &[("wisdom", 70.0), ("empathy", 55.0), ("harmony", 40.0)],
        )
        .with_pieces(vec!["semilla:amanecer".into(), "semilla:rio".into()]),
        Being::seed(
            "Teo Mar",
            &[("courage", 65.0), ("strength", 60.0), ("cooperation", 35.0)],
        )
        .with_pieces(vec!["semilla:roca".into()]),
        Being::seed(
            "Nia Sol",
            &[("knowledge", 60.0), ("curiosity", 70.0), ("creativity", 45.0)],
        )
        .with_pieces(vec!["semilla:estrella".into(), "semilla:viento".into()]),
        Being::seed(
            "Bruno Cal",
            &[("resilience", 75.0), ("cooperation", 50.0), ("strength", 40.0)],
        ),
        Being::seed(
            "Vera Pax",
            &[("empathy", 70.0), ("harmony", 60.0), ("wisdom", 35.0)],
        ),
        Being::seed(
            "Iker Vento",
            &[("vision", 65.0), ("courage", 45.0), ("curiosity", 40.0)],
        ),
        Being::seed(
            "Luz Arena",
            &[("creativity", 70.0), ("knowledge", 40.0), ("empathy", 30.0)],
        ),
        Being::seed(
            "Milo Raíz",
            &[("wisdom", 50.0), ("resilience", 45.0), ("cooperation", 55.0)],
        ),
    ]
}
