fn main() {
    subtrack_frontend::run();
}
