use clap::Parser;
use trafficinfo::app::TrafficInfoCliArguments;

fn main() {
    env_logger::init();
    let args = TrafficInfoCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running trafficinfo: {e}");
            std::process::exit(1);
        }
    }
}
