fn main() -> std::process::ExitCode {
  supplement_coach_lib::run()
}
