use ui::App;

fn main() {
    dioxus::launch(App);
}
