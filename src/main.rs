use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use donor_registry::commands;
use donor_registry::commands::donors::OverrideFields;

/// Blood donor registry management CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        /// Number of migrations to run (all if not specified)
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Reset the database (drop all tables and run migrations)
    Reset,
    /// Show migration status
    Status,
    /// Rebuild the donors overview table
    RefreshOverview {
        /// Refresh a single donor instead of the whole table
        #[arg(long)]
        rodne_cislo: Option<String>,
    },
    /// Import a donation-center export file as one batch
    Import {
        /// File with semicolon-delimited donation records
        file: PathBuf,
        /// Donation center slug; omit for a manual import
        #[arg(short, long)]
        center: Option<String>,
    },
    /// Import donor contacts (e-mails and phones) into notes
    ImportContacts {
        /// File with one contact line per donor
        file: PathBuf,
        /// Who performed the import, for the audit log
        #[arg(long)]
        imported_by: Option<String>,
        /// Treat the file as CSV instead of plain text
        #[arg(long)]
        csv: bool,
    },
    /// Delete a batch together with its records
    DeleteBatch {
        /// Batch id
        id: i32,
    },
    /// Show one batch and its records
    BatchDetail {
        /// Batch id
        id: i32,
    },
    /// Show one donor's overview, history, contacts and medal standing
    DonorDetail {
        /// National id of the donor
        rodne_cislo: String,
    },
    /// Show the contact-import audit trail
    ContactImportLogs,
    /// List donors due a medal
    AwardPrep {
        /// Medal slug (br, st, zl, kr3, kr2, kr1, plk)
        medal_slug: String,
    },
    /// Award a medal to one or more donors
    AwardMedal {
        /// Medal slug
        medal_slug: String,
        /// National ids of the donors
        #[arg(required = true)]
        rodna_cisla: Vec<String>,
    },
    /// Remove an awarded medal from a donor
    RemoveMedal {
        /// Medal slug
        medal_slug: String,
        /// National id of the donor
        rodne_cislo: String,
    },
    /// Exclude a donor from the overview
    IgnoreDonor {
        /// National id of the donor
        rodne_cislo: String,
        /// Why the donor is ignored
        #[arg(short, long)]
        reason: String,
    },
    /// Put an ignored donor back into the overview
    UnignoreDonor {
        /// National id of the donor
        rodne_cislo: String,
    },
    /// Set manual corrections for a donor's personal data
    SetOverride {
        /// National id of the donor
        rodne_cislo: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
        #[arg(long)]
        kod_pojistovny: Option<String>,
    },
    /// Drop a donor's manual corrections
    ClearOverride {
        /// National id of the donor
        rodne_cislo: String,
    },
    /// Render a donor's next import line
    PrepareLine {
        /// National id of the donor
        rodne_cislo: String,
        /// Newly reported donation count
        #[arg(short, long)]
        donation_count: Option<i32>,
        /// Donation center the line is prepared for
        #[arg(short, long)]
        center: Option<String>,
    },
    /// Export all donors from the overview as CSV
    ExportDonors {
        /// Output file
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { steps } => {
            commands::migrate::execute(steps).await?;
        }
        Commands::Reset => {
            commands::migrate::reset().await?;
        }
        Commands::Status => {
            commands::migrate::status().await?;
        }
        Commands::RefreshOverview { rodne_cislo } => {
            commands::overview::refresh(rodne_cislo.as_deref()).await?;
        }
        Commands::Import { file, center } => {
            commands::imports::import(&file, center.as_deref()).await?;
        }
        Commands::ImportContacts {
            file,
            imported_by,
            csv,
        } => {
            commands::imports::import_contacts(&file, imported_by.as_deref(), csv).await?;
        }
        Commands::DeleteBatch { id } => {
            commands::imports::delete_batch(id).await?;
        }
        Commands::BatchDetail { id } => {
            commands::imports::batch_detail(id).await?;
        }
        Commands::DonorDetail { rodne_cislo } => {
            commands::donors::detail(&rodne_cislo).await?;
        }
        Commands::ContactImportLogs => {
            commands::imports::contact_import_logs().await?;
        }
        Commands::AwardPrep { medal_slug } => {
            commands::medals::award_prep(&medal_slug).await?;
        }
        Commands::AwardMedal {
            medal_slug,
            rodna_cisla,
        } => {
            commands::medals::award(&medal_slug, &rodna_cisla).await?;
        }
        Commands::RemoveMedal {
            medal_slug,
            rodne_cislo,
        } => {
            commands::medals::remove(&medal_slug, &rodne_cislo).await?;
        }
        Commands::IgnoreDonor {
            rodne_cislo,
            reason,
        } => {
            commands::donors::ignore(&rodne_cislo, &reason).await?;
        }
        Commands::UnignoreDonor { rodne_cislo } => {
            commands::donors::unignore(&rodne_cislo).await?;
        }
        Commands::SetOverride {
            rodne_cislo,
            first_name,
            last_name,
            address,
            city,
            postal_code,
            kod_pojistovny,
        } => {
            let fields = OverrideFields {
                first_name,
                last_name,
                address,
                city,
                postal_code,
                kod_pojistovny,
            };
            commands::donors::set_override(&rodne_cislo, fields).await?;
        }
        Commands::ClearOverride { rodne_cislo } => {
            commands::donors::clear_override(&rodne_cislo).await?;
        }
        Commands::PrepareLine {
            rodne_cislo,
            donation_count,
            center,
        } => {
            commands::donors::prepare_line(&rodne_cislo, donation_count, center.as_deref())
                .await?;
        }
        Commands::ExportDonors { output } => {
            commands::export::export_donors(&output).await?;
        }
    }

    Ok(())
}
