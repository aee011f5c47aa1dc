//! Front desk CLI: the stand-in presentation layer for the registry core.
//!
//! Renders records as text cards, registers and removes patients, and writes
//! the CSV/PDF export files. Operation outcomes print as `ok:` / `warning:` /
//! `error:` lines; no failure aborts anything beyond the current command.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use prontuario_core::{
    to_csv, to_pdf, CategoryStyle, ExportError, LocalStore, NewPatient, PatientRecord, Registry,
    Store, CSV_FILENAME, PDF_FILENAME,
};

#[derive(Parser)]
#[command(name = "prontuario", version, about = "Registro de pacientes da recepção")]
struct Cli {
    /// Database file holding the registry
    #[arg(long, global = true, default_value = "prontuario.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new patient
    Add(AddArgs),
    /// List registered patients as cards
    List,
    /// Remove one or more patients by id
    Remove {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Export the registry as pacientes.csv
    ExportCsv {
        /// Output path (defaults to the standard filename)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Export the registry as relatorio_pacientes.pdf
    ExportPdf {
        /// Output path (defaults to the standard filename)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    mother_name: String,
    /// Birth date as DD/MM/YYYY
    #[arg(long, default_value = "")]
    birth_date: String,
    /// Entry time as HH:MM (24h)
    #[arg(long, default_value = "")]
    entry_time: String,
    /// Exit time as HH:MM (24h)
    #[arg(long, default_value = "")]
    exit_time: String,
    /// Exit date as DD/MM/YYYY
    #[arg(long, default_value = "")]
    exit_date: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    complement: String,
    #[arg(long, default_value = "")]
    contacts: String,
    #[arg(long, default_value = "")]
    category: String,
    #[arg(long, default_value = "")]
    notes: String,
    /// Image file to embed as the patient photo
    #[arg(long)]
    photo: Option<PathBuf>,
}

impl From<AddArgs> for NewPatient {
    fn from(args: AddArgs) -> Self {
        NewPatient {
            name: args.name,
            mother_name: args.mother_name,
            birth_date: args.birth_date,
            entry_time: args.entry_time,
            exit_time: args.exit_time,
            exit_date: args.exit_date,
            address: args.address,
            complement: args.complement,
            contacts: args.contacts,
            category: args.category,
            notes: args.notes,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            println!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    debug!(db = %cli.db.display(), "opening registry store");
    let store = LocalStore::open(&cli.db)
        .with_context(|| format!("abrindo registro em {}", cli.db.display()))?;
    let registry = Registry::new(&store);

    match cli.command {
        Command::Add(args) => {
            let photo_bytes = match &args.photo {
                Some(path) => Some(
                    fs::read(path).with_context(|| format!("lendo foto {}", path.display()))?,
                ),
                None => None,
            };
            let record = registry.create(args.into(), photo_bytes.as_deref())?;
            println!("ok: Paciente cadastrado com sucesso! (id {})", record.id);
        }

        Command::List => {
            let records = store.load()?;
            if records.is_empty() {
                println!("Nenhum paciente cadastrado ainda.");
            } else {
                for record in &records {
                    print_card(record);
                }
            }
        }

        Command::Remove { ids } => {
            let removed = if ids.len() == 1 {
                registry.delete_one(ids[0])?
            } else {
                registry.delete_many(&ids)?
            };
            if removed == 1 {
                println!("ok: Paciente removido com sucesso!");
            } else {
                println!("ok: {} paciente(s) removido(s) com sucesso!", removed);
            }
        }

        Command::ExportCsv { out } => {
            let records = store.load()?;
            match to_csv(&records) {
                Ok(csv) => {
                    let path = out.unwrap_or_else(|| PathBuf::from(CSV_FILENAME));
                    fs::write(&path, csv)
                        .with_context(|| format!("gravando {}", path.display()))?;
                    println!("ok: Exportado para {}", path.display());
                }
                Err(ExportError::EmptySet) => return Ok(warn_empty_export()),
                Err(err) => return Err(err.into()),
            }
        }

        Command::ExportPdf { out } => {
            let records = store.load()?;
            match to_pdf(&records) {
                Ok(pdf) => {
                    let path = out.unwrap_or_else(|| PathBuf::from(PDF_FILENAME));
                    fs::write(&path, pdf)
                        .with_context(|| format!("gravando {}", path.display()))?;
                    println!("ok: Exportado para {}", path.display());
                }
                Err(ExportError::EmptySet) => return Ok(warn_empty_export()),
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn warn_empty_export() -> ExitCode {
    println!("warning: Nenhum paciente cadastrado para exportar!");
    ExitCode::FAILURE
}

/// Text rendition of the patient card, placeholders matching the UI cards.
fn print_card(record: &PatientRecord) {
    let style = CategoryStyle::for_label(&record.category);
    let age = match record.age {
        Some(a) => format!("{} anos", a),
        None => "N/A".to_string(),
    };

    println!("#{} {}", record.id, placeholder(&record.name, "Nome não informado"));
    println!("  Mãe: {}", placeholder(&record.mother_name, "Não informado"));
    println!("  Idade: {}", age);
    println!("  Entrada: {}", placeholder(&record.entry_time, "Não registrado"));
    if let Some(exit_time) = &record.exit_time {
        match &record.exit_date {
            Some(exit_date) => println!("  Saída: {} ({})", exit_time, exit_date),
            None => println!("  Saída: {}", exit_time),
        }
    }
    let complement = record
        .complement
        .as_deref()
        .map(|c| format!(" - {}", c))
        .unwrap_or_default();
    println!(
        "  Endereço: {}{}",
        placeholder(&record.address, "Não informado"),
        complement
    );
    println!("  Contatos: {}", placeholder(&record.contacts, "Não informado"));
    println!("  Observações: {}", record.notes.as_deref().unwrap_or("Nenhuma"));
    println!(
        "  Categoria: {} [{}]",
        placeholder(&record.category, "Sem categoria"),
        style.css_class()
    );
    if record.photo.is_some() {
        println!("  Foto: anexada");
    }
    println!();
}

fn placeholder<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
