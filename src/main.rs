use vm_diagram;

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the diagram application
    vm_diagram::run_app()
}
