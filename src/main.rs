use pwaforge::{
    cli::{get_args, get_log_level_from_verbose, Runner},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    match Runner::new(args).run() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => default_error_handler(err),
    }
}
