use passman::ir::{Function, FunctionData, Program};
use passman::logger;
use passman::opt::passes::{CALLEE_BB, COUNT_BB};
use passman::opt::{Error, FunctionPassManager};
use std::rc::Rc;
use std::{env, process};

fn main() {
  if env::args().any(|arg| arg == "-v" || arg == "--verbose") {
    logger::set_verbose(true);
  }

  // @main calls @fib and @print, @fib calls itself
  let mut program = Program::new();
  let print = program.new_func(new_func("@print", &["%entry"]));
  let fib = program.new_func(new_func("@fib", &["%entry", "%then", "%else"]));
  program.func_mut(fib).add_callee(fib);
  let mut main = new_func("@main", &["%entry", "%loop", "%end"]);
  main.add_callee(fib);
  main.add_callee(print);
  program.new_func(main);

  let mut passman = FunctionPassManager::new();
  passman.set_context(Some(&program));
  if !passman.register(&CALLEE_BB) {
    process::exit(1);
  }

  println!("{:<8} {:>6} {:>10}", "function", "blocks", "callee bbs");
  for &func in program.func_layout() {
    match stats(&mut passman, func) {
      Ok((bbs, callee_bbs)) => {
        let name = program.func(func).name();
        println!("{:<8} {:>6} {:>10}", name, bbs, callee_bbs);
      }
      Err(err) => {
        logger::log_error(&err.to_string());
        break;
      }
    }
  }
  passman.invalidate_all();
  logger::log_global();
  if logger::has_error() {
    process::exit(1);
  }
}

/// Creates a function with the given basic blocks.
fn new_func(name: &str, bbs: &[&str]) -> FunctionData {
  let mut data = FunctionData::new(name.into());
  for bb in bbs {
    data.new_bb(Some(bb.to_string()));
  }
  data
}

/// Returns the basic block count of the function and its callees.
fn stats(
  passman: &mut FunctionPassManager,
  func: Function,
) -> Result<(Rc<usize>, Rc<usize>), Error> {
  let bbs = passman.get_result_as::<usize>(COUNT_BB.name, func)?;
  let callee_bbs = passman.get_result_as::<usize>(CALLEE_BB.name, func)?;
  Ok((bbs, callee_bbs))
}
