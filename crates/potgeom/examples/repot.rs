use potgeom::{Pot, PotShapeError, VolumeModel, length_from_inches, volume_difference, volume_to_liters};

// Compares two candidate pots the way a gardener would when repotting:
// how much more soil does the other one hold?
fn main() -> Result<(), PotShapeError> {
    let tall = Pot::new(11., 19., 18.)?;
    let squat = Pot::new(17., 18., 16.)?;

    for (name, pot) in [("tall", &tall), ("squat", &squat)] {
        println!(
            "{name} pot {}x{}x{} cm holds {:.1} cm3 ({:.2} l)",
            pot.diameter_base(),
            pot.diameter_top(),
            pot.height(),
            pot.volume(),
            volume_to_liters(pot.volume()),
        );
    }

    println!(
        "difference in volume is {:.1} cm3",
        volume_difference(&tall, &squat)
    );

    // A new pot should be 2-4 inches wider at the rim than the root ball.
    let root_ball = 12.;
    for extra_inches in [2., 4.] {
        let pot = Pot::new(root_ball, root_ball + length_from_inches(extra_inches), 20.)?;
        println!(
            "root ball {root_ball} cm + {extra_inches} in: pot {:.2} cm wide holds {:.1} cm3",
            pot.diameter_top(),
            pot.volume(),
        );
    }

    Ok(())
}
