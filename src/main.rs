fn main() {
    scriptgen::app::cli::run();
}
