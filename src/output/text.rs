use std::fmt::Debug;
use std::io::Write;
use num_traits::{PrimInt, Signed};

use crate::output::record::ResultRecord;
use crate::Result;

/// Prints a human-readable rendering of a record, unreachable vertices shown as `inf`
pub fn write_record<W, O>(out: &mut O, record: &ResultRecord<W>) -> Result<()>
where
    W: PrimInt + Signed + Debug,
    O: Write,
{
    writeln!(out, "Source node : {}", record.source)?;
    write!(out, "Distances : [ ")?;
    for distance in &record.distances.distances {
        match distance {
            Some(cost) => write!(out, "{:?} ", cost)?,
            None => write!(out, "inf ")?,
        }
    }
    writeln!(out, "]")?;
    writeln!(out, "    Destination : {}", record.eccentricity.node)?;
    writeln!(out, "    Cost : {:?}", record.eccentricity.cost)?;
    writeln!(out, "    Number of nodes : {}", record.path.len())?;
    write!(out, "    Path: [")?;
    for vertex in &record.path {
        write!(out, " {}", vertex)?;
    }
    writeln!(out, " ]")?;
    Ok(())
}
