fn main() {
    let cli = xcconfig_graph::cli::parse();
    xcconfig_graph::app::init_tracing(cli.verbose, cli.quiet);
    let code = xcconfig_graph::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
