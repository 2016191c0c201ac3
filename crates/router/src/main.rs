fn main() {
    router::start(std::env::args());
}
