//! Command-line front end for the `jwt_probe` audit toolkit

use std::{
    path::PathBuf,
    process::ExitCode,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use jwt_probe::{
    crack_parallel, error::ForgeError, forge, AbortReason, CrackOptions, CrackOutcome, Token,
    Wordlist,
};

/// Exhausted the wordlist without a match, or the search was aborted
const EXIT_NOT_FOUND: u8 = 1;
/// Malformed token, JSON, or wordlist input
const EXIT_INPUT: u8 = 2;
/// The token declares an algorithm this tool cannot work with
const EXIT_UNSUPPORTED: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "jwt-probe",
    version,
    about = "Audits JWTs for weak HMAC secrets, alg:none acceptance, and forgeability"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Brute-force the signing secret of an HS256 token
    Crack {
        /// JWT token to crack
        #[arg(short, long)]
        token: String,

        /// Path to the wordlist file of candidate secrets, one per line
        #[arg(short, long)]
        wordlist: PathBuf,

        /// Number of worker threads (0 = one per core)
        #[arg(long, default_value_t = 0)]
        threads: usize,

        /// Stop after this many attempts
        #[arg(long)]
        max_attempts: Option<u64>,

        /// Stop after this many seconds
        #[arg(long)]
        time_limit: Option<u64>,
    },

    /// Forge a token from a JSON payload
    Forge {
        /// JWT payload as a JSON object
        #[arg(short, long)]
        payload: String,

        /// Secret used to sign; omit to emit an unsigned token
        #[arg(short, long)]
        secret: Option<String>,

        /// Extra header fields as JSON, merged over the defaults
        #[arg(long)]
        header: Option<String>,

        /// Value for the `alg` header (an `alg` in --header wins)
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// Forge an unsigned token (the alg:none attack)
    #[command(name = "none")]
    AlgNone {
        /// JWT payload as a JSON object
        #[arg(short, long)]
        payload: String,

        /// Extra header fields as JSON; `alg` is forced to `none`
        #[arg(long)]
        header: Option<String>,
    },

    /// Decode and display a token without verifying it
    Inspect {
        /// JWT compact serialization
        token: String,
    },
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Crack {
            token,
            wordlist,
            threads,
            max_attempts,
            time_limit,
        } => cmd_crack(&token, &wordlist, threads, max_attempts, time_limit),
        Command::Forge {
            payload,
            secret,
            header,
            algorithm,
        } => cmd_forge(&payload, secret.as_deref(), header.as_deref(), algorithm.as_deref()),
        Command::AlgNone { payload, header } => cmd_alg_none(&payload, header.as_deref()),
        Command::Inspect { token } => cmd_inspect(&token),
    }
}

fn cmd_crack(
    raw: &str,
    wordlist: &PathBuf,
    threads: usize,
    max_attempts: Option<u64>,
    time_limit: Option<u64>,
) -> color_eyre::Result<ExitCode> {
    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let token = match Token::parse(raw) {
        Ok(token) => token,
        Err(err) => return input_error(&err),
    };
    let wordlist = match Wordlist::load(wordlist) {
        Ok(wordlist) => wordlist,
        Err(err) => return input_error(&err),
    };

    println!(
        "{} loaded {} candidate secrets",
        "▸".blue().bold(),
        wordlist.len()
    );

    let progress = Arc::new(AtomicU64::new(0));
    let options = CrackOptions {
        max_attempts,
        time_limit: time_limit.map(Duration::from_secs),
        cancel: None,
        progress: Some(Arc::clone(&progress)),
    };

    let bar = ProgressBar::new(wordlist.len() as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {per_sec}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );

    let done = AtomicBool::new(false);
    let outcome = thread::scope(|scope| {
        scope.spawn(|| {
            while !done.load(Ordering::Relaxed) {
                bar.set_position(progress.load(Ordering::Relaxed));
                thread::sleep(Duration::from_millis(100));
            }
        });
        let outcome = crack_parallel(&token, &wordlist, &options);
        done.store(true, Ordering::Relaxed);
        outcome
    });
    bar.finish_and_clear();

    match outcome {
        CrackOutcome::Found {
            secret,
            attempts,
            elapsed,
        } => {
            println!(
                "{} secret found: {}",
                "✔".green().bold(),
                secret.green().bold()
            );
            println!("  attempts: {attempts}");
            println!("  elapsed:  {}", format_duration(elapsed));
            Ok(ExitCode::SUCCESS)
        }
        CrackOutcome::Exhausted { attempts, elapsed } => {
            println!(
                "{} no secret found after {attempts} attempts ({}); try another wordlist",
                "✘".red().bold(),
                format_duration(elapsed)
            );
            Ok(ExitCode::from(EXIT_NOT_FOUND))
        }
        CrackOutcome::Aborted {
            reason: AbortReason::UnsupportedAlgorithm(alg),
            ..
        } => {
            eprintln!(
                "{} cannot crack a token declaring algorithm '{}'",
                "error:".red().bold(),
                alg
            );
            Ok(ExitCode::from(EXIT_UNSUPPORTED))
        }
        CrackOutcome::Aborted {
            reason, attempts, ..
        } => {
            println!(
                "{} search stopped after {attempts} attempts: {reason}",
                "✘".yellow().bold()
            );
            Ok(ExitCode::from(EXIT_NOT_FOUND))
        }
    }
}

fn cmd_forge(
    payload: &str,
    secret: Option<&str>,
    header: Option<&str>,
    algorithm: Option<&str>,
) -> color_eyre::Result<ExitCode> {
    let overrides = match merge_algorithm(header, algorithm) {
        Ok(overrides) => overrides,
        Err(err) => return input_error(&err),
    };

    match forge::forge(overrides.as_deref(), payload, secret.map(str::as_bytes)) {
        Ok(token) => {
            println!("{} token forged", "✔".green().bold());
            println!("{token}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ ForgeError::UnknownAlgorithm(_)) => {
            eprintln!("{} {err}", "error:".red().bold());
            Ok(ExitCode::from(EXIT_UNSUPPORTED))
        }
        Err(err) => input_error(&err),
    }
}

fn cmd_alg_none(payload: &str, header: Option<&str>) -> color_eyre::Result<ExitCode> {
    match forge::forge_unsigned(header, payload) {
        Ok(token) => {
            println!("{} unsigned token forged", "✔".green().bold());
            println!("{token}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => input_error(&err),
    }
}

fn cmd_inspect(raw: &str) -> color_eyre::Result<ExitCode> {
    let token = match Token::parse(raw) {
        Ok(token) => token,
        Err(err) => return input_error(&err),
    };

    println!("{}", "Header".cyan().bold());
    println!("{}", serde_json::to_string_pretty(token.header())?.cyan());
    println!("{}", "Payload".yellow().bold());
    println!("{}", serde_json::to_string_pretty(token.payload())?.yellow());

    if token.signature().is_empty() {
        println!("{}", "Signature: none (unsigned token)".red().bold());
    } else {
        println!("Signature: {} bytes", token.signature().len());
    }
    match token.algorithm() {
        Ok(alg) => println!("Algorithm: {alg}"),
        Err(err) => println!("{} {err}", "warning:".yellow().bold()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Folds a standalone `--algorithm` into the header overrides; an explicit
/// `alg` in `--header` wins.
fn merge_algorithm(
    header: Option<&str>,
    algorithm: Option<&str>,
) -> Result<Option<String>, serde_json::Error> {
    let Some(alg) = algorithm else {
        return Ok(header.map(str::to_owned));
    };

    let mut map: serde_json::Map<String, serde_json::Value> = match header {
        Some(raw) => serde_json::from_str(raw)?,
        None => serde_json::Map::new(),
    };
    map.entry("alg".to_owned())
        .or_insert_with(|| serde_json::Value::String(alg.to_owned()));
    Ok(Some(serde_json::to_string(&map)?))
}

fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.2}s")
    } else {
        format!("{}m {:.2}s", elapsed.as_secs() / 60, secs % 60.0)
    }
}

fn input_error(err: &dyn std::error::Error) -> color_eyre::Result<ExitCode> {
    eprintln!("{} {err}", "error:".red().bold());
    Ok(ExitCode::from(EXIT_INPUT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_flag_folds_into_overrides() {
        let merged = merge_algorithm(None, Some("HS512")).unwrap().unwrap();
        assert_eq!(merged, r#"{"alg":"HS512"}"#);
    }

    #[test]
    fn explicit_header_alg_wins_over_the_flag() {
        let merged = merge_algorithm(Some(r#"{"alg":"none"}"#), Some("HS256"))
            .unwrap()
            .unwrap();
        assert_eq!(merged, r#"{"alg":"none"}"#);
    }

    #[test]
    fn no_flag_passes_the_header_through() {
        assert_eq!(merge_algorithm(None, None).unwrap(), None);
        assert_eq!(
            merge_algorithm(Some(r#"{"kid":"x"}"#), None).unwrap(),
            Some(r#"{"kid":"x"}"#.to_owned())
        );
    }

    #[test]
    fn durations_format_like_the_reports() {
        assert_eq!(format_duration(Duration::from_millis(5)), "5.00ms");
        assert_eq!(format_duration(Duration::from_secs(12)), "12.00s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5.00s");
    }
}
