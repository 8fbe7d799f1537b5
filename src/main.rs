fn main() {
    complyscribe_action::app::cli::run();
}
