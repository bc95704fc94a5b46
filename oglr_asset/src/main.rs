pub(crate) mod mesh;
pub(crate) mod utils;

use anyhow::Result;
use log::{debug, error, info, warn};
use mesh::obj;
use std::{fs, io, path::Path};
use structopt::StructOpt;
use walkdir::WalkDir;

// Cli arguments
#[derive(StructOpt, Debug)]
#[structopt(name = "oglr_asset")]
struct CliArgs {
    /// Specify the input folder
    input: String,
    /// Output directory, to place the converted files in
    #[structopt(short = "o", long = "output")]
    output: String,
    /// Output debug info
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

/// Happens during setup or when the run is done
#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Input folder does not exist: {0}")]
    InputFolderNonExistent(String),
    #[error("Output folder structure could not be created: {0}")]
    ErrorCreatingOutputStructure(#[from] io::Error),
    #[error("{0} asset(s) could not be converted")]
    FailedAssets(usize),
}

fn main() -> Result<()> {
    let args = CliArgs::from_args();

    if !args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    } else {
        env_logger::Builder::new()
            .filter(None, log::LevelFilter::Debug)
            .init();
    }

    prepare(args)
}

fn prepare(args: CliArgs) -> Result<()> {
    let output_path = Path::new(&args.output);

    let input_path = Path::new(&args.input);
    if !input_path.is_dir() {
        return Err(CliError::InputFolderNonExistent(input_path.display().to_string()).into());
    }

    let mut failed = 0;
    for entry in WalkDir::new(input_path) {
        let path = match &entry {
            Err(err) => {
                warn!("Error parsing path: {}", err);
                continue;
            }
            Ok(entry) => entry.path(),
        };

        if path.is_dir() {
            continue;
        }

        let relative = match path.strip_prefix(input_path) {
            Ok(relative) => relative,
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                continue;
            }
        };
        let output = output_path.join(relative);

        // creating the output folder of the input file in the same structure
        let local_output_folder = output.parent().unwrap_or(output_path);
        if !local_output_folder.exists() {
            fs::create_dir_all(&local_output_folder)
                .map_err(CliError::ErrorCreatingOutputStructure)?;
        }

        // check extension
        if let Some(Some(extension)) = path.extension().map(|x| x.to_str()) {
            match extension.to_ascii_lowercase().as_ref() {
                "obj" => {
                    if let Err(err) = obj::process(path, local_output_folder) {
                        error!("Skipping {}: {:#}", path.display(), err);
                        failed += 1;
                    }
                }
                "toml" | "mtl" => debug!("Ignored companion file: {}", &path.display()),
                _ => warn!("Could not handle path: {}", &path.display()),
            }
        } else {
            warn!(
                "Ignored file \"{}\", because no file extension was found.",
                path.display()
            );
        }
    }

    if failed > 0 {
        return Err(CliError::FailedAssets(failed).into());
    }
    info!("Finished converting {}", input_path.display());
    Ok(())
}
