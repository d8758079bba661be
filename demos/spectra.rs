use radio_spectra::{Model, ModelKind, Spectrum};
use strum::IntoEnumIterator;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // MWA to VLA frequency range [GHz]
    let freqs: Vec<f64> = (0..12).map(|i| 0.07 * 1.6f64.powi(i)).collect();

    let models = vec![
        Model::from_name("powlaw", &[1., 0.8])?,
        Model::from_name("singhomobremss", &[2., 0.7, 0.2])?,
        Model::from_name("singinhomobremss", &[2., 0.7, -0.4, 0.2])?,
        Model::from_name("internalbremss", &[2., 0.7, 0.2])?,
        Model::from_name("singSSA", &[1., 2.4, 0.3])?,
        Model::from_name("duffcurve", &[1., 0.5, 0.3])?,
        Model::from_name("powlawbreak", &[1., 0.7, 1.4])?,
    ];

    print!("{:>8}", "GHz");
    models.iter().for_each(|m| print!(" {:>16}", m.kind()));
    println!();
    let fluxes: Vec<_> = models.iter().map(|m| m.par_fluxes(&freqs)).collect();
    for (i, freq) in freqs.iter().enumerate() {
        print!("{:8.3}", freq);
        fluxes.iter().for_each(|s| print!(" {:16.6e}", s[i]));
        println!();
    }

    println!("\nAvailable models:");
    for kind in ModelKind::iter() {
        println!(" - {:26}: {}", kind.to_string(), kind.param_names().join(", "));
    }

    Ok(())
}
