fn main() {
    acme_admin_frontend::start();
}
