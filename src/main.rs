use clap::Parser;
use miette::Result;
use tubesc::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Terminate silently on a closed pipe (`tubesc demo | head`).
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    tubesc::core::logging::init(global.verbose);

    match cli.command {
        Commands::Demo(args) => tubesc::cli::commands::demo::run(args, &global),
        Commands::Rates(cmd) => tubesc::cli::commands::rates::run(cmd, &global),
    }
}
