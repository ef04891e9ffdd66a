use std::io::{self, Write};

use clap::Parser;
use eyre::{Result, WrapErr};
use g2add_ecc::{
    add_affine, components, encode_component, fq_from_str, g2_from_coords,
    halo2curves::bn256::G2Affine,
    Component,
};
use tracing::debug;

/// Adds two affine BN254 G2 points and prints one base field component of
/// the sum as `0x` + 64 uppercase hex digits, without a trailing newline.
#[derive(Parser)]
#[command(
    name = "g2add",
    about = "Add two BN254 G2 points and print one component of the sum",
    version = crate::G2ADD_VERSION_MESSAGE
)]
pub struct AddCmd {
    #[arg(value_name = "X1_C0", help = "x.c0 of the first point")]
    x1_c0: String,

    #[arg(value_name = "X1_C1", help = "x.c1 of the first point")]
    x1_c1: String,

    #[arg(value_name = "Y1_C0", help = "y.c0 of the first point")]
    y1_c0: String,

    #[arg(value_name = "Y1_C1", help = "y.c1 of the first point")]
    y1_c1: String,

    #[arg(value_name = "X2_C0", help = "x.c0 of the second point")]
    x2_c0: String,

    #[arg(value_name = "X2_C1", help = "x.c1 of the second point")]
    x2_c1: String,

    #[arg(value_name = "Y2_C0", help = "y.c0 of the second point")]
    y2_c0: String,

    #[arg(value_name = "Y2_C1", help = "y.c1 of the second point")]
    y2_c1: String,

    #[arg(
        value_name = "COMPONENT",
        help = "Component of the sum to print: 1 = x.c0, 2 = x.c1, 3 = y.c0, 4 = y.c1"
    )]
    component: String,
}

impl AddCmd {
    pub fn run(&self) -> Result<()> {
        let component = self.execute()?;
        print!("{}", component);
        io::stdout().flush()?;
        Ok(())
    }

    fn execute(&self) -> Result<String> {
        let selector: Component = self.component.parse()?;
        let p = parse_point(&self.x1_c0, &self.x1_c1, &self.y1_c0, &self.y1_c1)
            .wrap_err("first input point")?;
        let q = parse_point(&self.x2_c0, &self.x2_c1, &self.y2_c0, &self.y2_c1)
            .wrap_err("second input point")?;
        let sum = add_affine(&p, &q);
        debug!(?p, ?q, ?sum, "added G2 points");
        Ok(encode_component(&components(&sum)[selector.index()]))
    }
}

fn parse_point(x_c0: &str, x_c1: &str, y_c0: &str, y_c1: &str) -> Result<G2Affine> {
    Ok(g2_from_coords(
        fq_from_str(x_c0)?,
        fq_from_str(x_c1)?,
        fq_from_str(y_c0)?,
        fq_from_str(y_c1)?,
    )?)
}
