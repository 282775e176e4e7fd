use std::io::{self, Write};

use crate::sim::runner::Sample;

/// Write a sampled trajectory as CSV.
///
/// Columns: time, pos_x, pos_y, vel_x, vel_y, acc_x, acc_y,
///          rotation_deg, fuel
pub fn write_trajectory<W: Write>(writer: &mut W, samples: &[Sample]) -> io::Result<()> {
    writeln!(
        writer,
        "time,pos_x,pos_y,vel_x,vel_y,acc_x,acc_y,rotation_deg,fuel"
    )?;

    for sample in samples {
        let s = &sample.state;
        writeln!(
            writer,
            "{:.4},{:.3},{:.3},{:.4},{:.4},{:.5},{:.5},{:.3},{:.4}",
            sample.time,
            s.position.x,
            s.position.y,
            s.velocity.x,
            s.velocity.y,
            s.acceleration.x,
            s.acceleration.y,
            s.rotation.to_degrees(),
            s.fuel,
        )?;
    }

    Ok(())
}

/// Write a trajectory CSV to a file at the given path.
pub fn write_trajectory_file(path: &str, samples: &[Sample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, samples)
}
