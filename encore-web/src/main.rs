use encore_web::App;

fn main() {
    dioxus::launch(App);
}
