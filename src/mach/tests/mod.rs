use super::*;

mod execute_test;

fn run(source: &str) -> Runtime {
    run_with(source, Config::default(), InputTape::new())
}

fn run_with(source: &str, config: Config, input: InputTape) -> Runtime {
    let program = Program::load(source).unwrap();
    let mut r = Runtime::with_config(program, config).with_input(input);
    assert_eq!(r.execute(100_000), Event::Halted);
    r
}

fn cell(r: &Runtime) -> u16 {
    let p = r.pointer();
    r.memory().read(p.page, p.offset)
}
