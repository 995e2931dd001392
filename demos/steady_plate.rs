use relax2d::cli::Args;
use relax2d::csv;
use relax2d::image;
use relax2d::solver;

fn main() {
    let args = Args::cli_setup("steady_plate");

    // Problem setup, rejected before any grid exists
    let config = match args.solve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid arguments: {err}");
            std::process::exit(1);
        }
    };

    let start = std::time::Instant::now();
    let solution = match solver::solve(&config) {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("solve failed: {err}");
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!(
        "converged in {} sweeps, max fractional change {:.3e}, {:.2?}",
        solution.sweeps, solution.max_frac_change, elapsed
    );
    println!(
        "field range: {:.2} K to {:.2} K",
        solution.temperatures.min(),
        solution.temperatures.max()
    );

    if let Some(path) = &args.csv {
        csv::write_csv(&solution.temperatures, path)
            .expect("Couldn't write csv");
    }
    if let Some(path) = &args.image {
        image::render(&solution.temperatures, path)
            .expect("Couldn't save image");
    }
}
