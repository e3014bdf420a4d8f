//! Company Info page

pub const TITLE: &str = "Company Info Page";
pub const BLURB: &str =
    "Chomp-a-Donut thrives on making its customers smile with its fantastic range of donuts.";

pub fn render() -> String {
    format!("{TITLE}\n\n{BLURB}")
}
