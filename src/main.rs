use anyhow::Result;
use clap::{Parser, Subcommand};
use kit::areas::repository::Repository;
use kit::artifacts::core::config::Config;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal content-addressable version control tool",
    long_about = "kit stores file snapshots as hash-identified objects, tracks a staging \
    index and reports status by reconciling the last commit, the index and the working directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        value_name = "PATH",
        help = "Run as if started in <PATH>"
    )]
    directory: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes a file as a blob and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "add",
        about = "Stage every change in the working directory",
        long_about = "This command stages untracked, modified and deleted files. Only '.' is supported."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "Pathspec, must be '.'")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit in the repository with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command prints staged changes, then unstaged and untracked files."
    )]
    Status,
    #[command(name = "ls-files", about = "List the paths in the index")]
    LsFiles,
    #[command(name = "log", about = "Show the commit history of the current branch")]
    Log,
    #[command(
        name = "branch",
        about = "List, create, or delete branches",
        long_about = "Without arguments this command lists branches. With a name it creates a branch \
        at the current commit, and with --delete it removes the branch."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: Option<String>,
        #[arg(short, long, requires = "name", help = "Delete the branch")]
        delete: bool,
    },
    #[command(
        name = "switch",
        about = "Switch to another branch",
        long_about = "This command replaces the tracked files with the snapshot of the target branch."
    )]
    Switch {
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
    },
}

fn open_repository(directory: &Path) -> Result<Repository> {
    let config = Config::load(directory)?;
    Ok(Repository::new(config, Box::new(std::io::stdout())))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let directory = match cli.directory {
        Some(directory) => directory,
        None => std::env::current_dir()?,
    };

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => directory.join(path),
                None => directory,
            };
            std::fs::create_dir_all(&path)?;

            open_repository(&path)?.init()?
        }
        Commands::CatFile { sha } => open_repository(&directory)?.cat_file(sha)?,
        Commands::HashObject { write, file } => {
            open_repository(&directory)?.hash_object(file, *write)?
        }
        Commands::Add { paths } => open_repository(&directory)?.add(paths)?,
        Commands::Commit { message } => {
            open_repository(&directory)?.commit(message)?;
        }
        Commands::Status => open_repository(&directory)?.status()?,
        Commands::LsFiles => open_repository(&directory)?.ls_files()?,
        Commands::Log => open_repository(&directory)?.log()?,
        Commands::Branch { name, delete } => {
            let repository = open_repository(&directory)?;
            match name {
                Some(name) if *delete => repository.delete_branch(name)?,
                Some(name) => repository.create_branch(name)?,
                None => repository.list_branches()?,
            }
        }
        Commands::Switch { name } => open_repository(&directory)?.switch(name)?,
    }

    Ok(())
}
