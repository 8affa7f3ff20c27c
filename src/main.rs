use anyhow::Result;
use clap::Parser;

use git_semv::config::{self, Config};
use git_semv::error::SemvError;
use git_semv::git::{GitTagSource, TagSource};
use git_semv::semver::{self, BumpKind, VersionList};
use git_semv::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-semv",
    about = "List semantic-version tags and compute the next version"
)]
struct Args {
    #[arg(
        value_name = "COMMAND",
        help = "list | now | major | minor | patch (default: list)"
    )]
    command: Option<String>,

    #[arg(short, long, help = "Pre-release version indicates (ex: 0.0.1-rc.0)")]
    pre: bool,

    #[arg(long, value_name = "NAME", help = "Specify pre-release version name")]
    pre_name: Option<String>,

    #[arg(short, long, help = "Build version indicates (ex: 0.0.1+3222d31)")]
    build: bool,

    #[arg(long, value_name = "NAME", help = "Specify build version name")]
    build_name: Option<String>,

    #[arg(
        short,
        long,
        help = "Include everything such as pre-release and build versions in list"
    )]
    all: bool,

    #[arg(short = 'B', long, help = "Create tag and push to the configured remote")]
    bump: bool,

    #[arg(
        short = 'x',
        long,
        value_name = "PREFIX",
        help = "Prefix for version and tag (default: v)"
    )]
    prefix: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-semv {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args, &config) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: &Args, config: &Config) -> git_semv::Result<()> {
    let prefix = args.prefix.as_deref().unwrap_or(&config.prefix);
    let source = GitTagSource::discover(".")?;

    match args.command.as_deref().unwrap_or("list") {
        "list" => {
            let list = VersionList::from_source(&source, prefix, !args.all)?;
            if !list.is_empty() {
                println!("{}", list);
            }
        }

        "now" | "current" => {
            let current = semver::current(&source, prefix)?;
            println!("{}", current.to_tag(prefix));
        }

        command => {
            let kind = command.parse::<BumpKind>().map_err(|_| {
                SemvError::InvalidBumpKind(format!(
                    "'{}' (expected list, now, major, minor or patch)",
                    command
                ))
            })?;

            let current = semver::current(&source, prefix)?;
            let mut next = current.bump(kind);

            if args.pre || args.pre_name.is_some() {
                let label = args.pre_name.as_deref().or(config.pre_name.as_deref());
                next = next.with_pre_release(label)?;
            }

            if args.build || args.build_name.is_some() {
                let name = match &args.build_name {
                    Some(name) => name.clone(),
                    None => source.head_short_id()?,
                };
                next = next.with_build(name);
            }

            let tag = next.to_tag(prefix);
            println!("{}", tag);

            if args.bump {
                ui::display_status(&format!("Creating tag: {}", tag));
                source.create_tag(&tag)?;

                ui::display_status(&format!("Pushing tag: {} to {}", tag, config.remote));
                source.push_tag(&config.remote, &tag)?;

                ui::display_success(&format!("Pushed tag: {} to {}", tag, config.remote));
            }
        }
    }

    Ok(())
}
