//! Masa resolution against an ephemeris provider.

use log::debug;
use panchangam_base::{Ayanamsha, Rashi, rashi_from_longitude, resolve_masa};
use panchangam_ephem::EphemerisProvider;
use panchangam_time::UtcTime;

use crate::error::SearchError;
use crate::panchang_types::MasaInfo;

/// Sun's sidereal rashi at `jd_ut`.
pub fn sun_rashi_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    ayanamsha: Ayanamsha,
    jd_ut: f64,
) -> Result<Rashi, SearchError> {
    let lons = provider.longitudes(jd_ut)?;
    Ok(rashi_from_longitude(ayanamsha.sidereal_from_rad(lons.sun_tropical_rad)).rashi)
}

/// Determine the masa containing `jd_ut`.
///
/// Brackets the instant between the previous and next new moon and
/// compares the Sun's sidereal rashi at both. A lunation without a solar
/// ingress is adhika and takes the name of the following month.
pub fn masa_for_instant<P: EphemerisProvider + ?Sized>(
    provider: &P,
    ayanamsha: Ayanamsha,
    jd_ut: f64,
) -> Result<MasaInfo, SearchError> {
    let prev_nm = provider.previous_new_moon(jd_ut)?;
    let next_nm = provider.next_new_moon(jd_ut)?;

    let rashi_at_start = sun_rashi_at(provider, ayanamsha, prev_nm)?;
    let rashi_at_end = sun_rashi_at(provider, ayanamsha, next_nm)?;
    let resolved = resolve_masa(rashi_at_start.index(), rashi_at_end.index());

    debug!(
        "masa bracket {prev_nm:.4}..{next_nm:.4}: {} -> {} = {}",
        rashi_at_start,
        rashi_at_end,
        resolved.masa.display_name(resolved.adhika)
    );

    Ok(MasaInfo {
        masa: resolved.masa,
        adhika: resolved.adhika,
        start: UtcTime::from_jd(prev_nm),
        end: UtcTime::from_jd(next_nm),
        rashi_at_start,
        rashi_at_end,
    })
}
