//! Home page

pub const TITLE: &str = "Welcome to Donut Delight!";
pub const BLURB: &str =
    "Explore a wide range of delicious donuts and enjoy a virtual eating experience. No calories, just fun!";

pub fn render() -> String {
    format!("{TITLE}\n\n{BLURB}")
}
