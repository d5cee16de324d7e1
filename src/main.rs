use clap::Parser;
use salon_booking::core::catalog;
use salon_booking::utils::error::ErrorSeverity;
use salon_booking::utils::{logger, validation::Validate};
use salon_booking::{
    render_appointments, sample_appointments, AppointmentSummary, BookingDesk, BookingError,
    BookingForm, CliConfig, Clock, Command, FixedClock, OutputFormat, SalonConfig, SystemClock,
    WEEKLY_SCHEDULE,
};

const EXIT_REJECTED: i32 = 4;

fn main() {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => match SalonConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => SalonConfig::default(),
    };

    logger::init_cli_logger(
        cli.verbose,
        config.log_format(),
        config.monitoring.log_level.as_deref(),
    );

    tracing::info!("Starting salon-booking CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(cli.command, config) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

fn run(command: Command, mut config: SalonConfig) -> Result<i32, BookingError> {
    match command {
        Command::Slots { date } => {
            let desk = BookingDesk::new(SystemClock, &config);
            let schedule = desk.day_schedule(date);
            println!("📅 {} ({})", date.format("%d/%m/%Y"), desk.hours_label(date));
            if schedule.is_closed() {
                println!("Fechado, nenhum horário disponível.");
            } else {
                println!("{}", desk.available_slots(date).join("  "));
            }
            Ok(0)
        }
        Command::Book {
            name,
            phone,
            service,
            date,
            time,
            today,
            lenient,
        } => {
            if lenient {
                config.booking.enforce_slot_membership = false;
                tracing::info!("🔧 Slot membership check disabled");
            }

            let form = BookingForm {
                name,
                phone,
                service,
                date,
                time,
            };
            let result = match today {
                Some(today) => BookingDesk::new(FixedClock(today), &config).submit(&form),
                None => BookingDesk::new(SystemClock, &config).submit(&form),
            };

            match result {
                Ok(confirmation) => {
                    println!("✅ Agendamento Confirmado!");
                    println!("{}", confirmation.message);
                    println!("Entraremos em contato em breve para confirmar os detalhes.");
                    Ok(0)
                }
                Err(rejection) => {
                    eprintln!("❌ {}", rejection.user_message());
                    tracing::debug!("Rejection detail: {}", rejection);
                    Ok(EXIT_REJECTED)
                }
            }
        }
        Command::Services => {
            for details in catalog::catalogue() {
                println!("✨ {} ({})", details.service, details.price_label());
                println!("   {}", details.description);
                println!("   ⏱️ {}", details.duration);
                for feature in details.features {
                    println!("   • {}", feature);
                }
                println!();
            }
            Ok(0)
        }
        Command::Appointments { format } => {
            let format = match format {
                Some(format) => format,
                None => config.output_format()?,
            };
            let appointments = sample_appointments();
            print!("{}", render_appointments(&appointments, format)?);

            let summary = AppointmentSummary::from_appointments(&appointments);
            if format == OutputFormat::Table {
                println!();
                println!(
                    "Total: {} | Confirmados: {} | Pendentes: {} | Cancelados: {}",
                    summary.total, summary.confirmed, summary.pending, summary.cancelled
                );
            }
            tracing::info!(
                total = summary.total,
                confirmed = summary.confirmed,
                pending = summary.pending,
                cancelled = summary.cancelled,
                "appointment summary"
            );
            Ok(0)
        }
        Command::Hours => {
            println!("🕘 Horários de Atendimento - {}", config.salon.name);
            for line in WEEKLY_SCHEDULE.summary() {
                println!("  {}", line);
            }
            println!();
            println!("📧 {}", config.salon.email);
            println!("📱 {}", config.salon.phone);
            println!("📍 {}", config.salon.city);
            if let Some(linktree) = &config.salon.linktree {
                println!("🔗 {}", linktree);
            }
            println!("Hoje: {}", SystemClock.today().format("%d/%m/%Y"));
            Ok(0)
        }
    }
}
