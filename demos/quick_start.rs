use relax2d::boundary::BoundarySpec;
use relax2d::config::SolveConfig;
use relax2d::shape::GridShape;
use relax2d::solver;

fn main() {
    let shape = GridShape::new(8, 6).unwrap();
    let boundary = BoundarySpec::new(100.0, 200.0, 300.0, 400.0).unwrap();
    let config = SolveConfig::new(shape, boundary, 1e-8);

    let solution = solver::solve(&config).unwrap();

    println!("sweeps: {}", solution.sweeps);
    for row in solution.temperatures.rows_top_down() {
        let cells: Vec<String> =
            row.iter().map(|v| format!("{v:7.2}")).collect();
        println!("{}", cells.join(" "));
    }
}
