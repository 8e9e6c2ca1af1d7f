fn main() {
    ducklings_web::run_app();
}
