fn main() -> std::process::ExitCode {
    oncoscreen_lib::run()
}
