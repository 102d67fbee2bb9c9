use anyhow::Result;
use clap::{Parser, Subcommand};
use nit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "nit",
    version = "0.1.0",
    about = "A minimal git-compatible object store",
    long_about = "This is a minimal content-addressable object store speaking git's \
    loose-object format. It covers just enough plumbing to snapshot a directory \
    and wrap it in a commit, and the repositories it writes can be read back \
    with stock git tooling.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
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
        path: Option<String>,
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
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "ls-tree",
        about = "List the entries of a tree object",
        long_about = "This command lists the direct entries of a tree object in the repository. \
        It requires the SHA of the tree to be specified."
    )]
    LsTree {
        #[arg(index = 1, help = "The tree SHA to list")]
        sha: String,
    },
    #[command(
        name = "write-tree",
        about = "Write the working directory as a tree object",
        long_about = "This command snapshots the current working directory as tree objects, \
        bottom-up, and prints the ID of the root tree."
    )]
    WriteTree,
    #[command(
        name = "commit-tree",
        about = "Create a commit object wrapping a tree",
        long_about = "This command creates a commit object referencing the given tree, \
        with an optional parent commit and the specified message."
    )]
    CommitTree {
        #[arg(index = 1, help = "The tree SHA to commit")]
        tree: String,
        #[arg(short = 'p', long, help = "The SHA of the parent commit")]
        parent: Option<String>,
        #[arg(short = 'm', long, help = "The commit message")]
        message: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::CatFile { sha } => {
            let pwd = std::env::current_dir()?;
            let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.cat_file(sha)?
        }
        Commands::HashObject { write, file } => {
            let pwd = std::env::current_dir()?;
            let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.hash_object(file, *write)?
        }
        Commands::LsTree { sha } => {
            let pwd = std::env::current_dir()?;
            let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.ls_tree(sha)?
        }
        Commands::WriteTree => {
            let pwd = std::env::current_dir()?;
            let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.write_tree()?
        }
        Commands::CommitTree {
            tree,
            parent,
            message,
        } => {
            let pwd = std::env::current_dir()?;
            let repository = Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.commit_tree(tree, parent.as_deref(), message)?
        }
    }

    Ok(())
}
