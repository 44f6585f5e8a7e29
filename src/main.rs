fn main() {
    drills::term::main();
}
