//! Trace the wetness of a weather transition frame by frame

use std::path::PathBuf;

use structopt::StructOpt;
use wetness_effects::{
    settings, DirectionalAmbient, FogData, FrameInputs, PrecipitationFade, SceneContext,
    ShaderKind, SkySnapshot, SolarTiming, WeatherFlags, WeatherSample, WetnessEffects,
    WetnessRules,
};
use wetness_effects::gpu::RecordingSink;

#[derive(StructOpt, Debug)]
#[structopt(name = "wetness_trace")]
struct TraceParameters {
    /// JSON config file holding the "Wetness Effects" block
    #[structopt(short, long, parse(from_os_str))]
    settings: Option<PathBuf>,

    /// Outgoing weather: clear, cloudy, rain, snow, fog, day-fog, night-fog
    #[structopt(long, default_value = "clear", parse(try_from_str = parse_weather))]
    from: WeatherSample,

    /// Incoming weather, same choices as --from
    #[structopt(long, default_value = "rain", parse(try_from_str = parse_weather))]
    to: WeatherSample,

    /// Precipitation fade timer of both weathers (units of 256)
    #[structopt(long, default_value = "128")]
    fade: f32,

    /// Game hour used for day/night fog
    #[structopt(long, default_value = "12.0")]
    hour: f32,

    /// Number of frames between 0% and 100% mix
    #[structopt(long, default_value = "10")]
    steps: u32,

    /// Use the classic rule set instead of the day/night one
    #[structopt(long)]
    classic: bool,

    /// Trace as if the player were indoors
    #[structopt(long)]
    interior: bool,
}

fn parse_weather(src: &str) -> Result<WeatherSample, &'static str> {
    let dense = || FogData { day_near: 0.0, day_power: 0.3, night_near: 0.0, night_power: 0.3 };
    let (id, flags, fog) = match src.to_lowercase().as_str() {
        "clear" => (1, WeatherFlags::default(), FogData::clear()),
        "cloudy" => (2, WeatherFlags::cloudy(), FogData::clear()),
        "rain" => (3, WeatherFlags::rainy(), FogData::clear()),
        "snow" => (4, WeatherFlags::snow(), FogData::clear()),
        "fog" => (5, WeatherFlags::default(), dense()),
        "day-fog" => (6, WeatherFlags::default(), FogData { night_near: 100.0, night_power: 1.0, ..dense() }),
        "night-fog" => (7, WeatherFlags::default(), FogData { day_near: 100.0, day_power: 1.0, ..dense() }),
        _ => return Err("invalid weather"),
    };
    Ok(WeatherSample::new(id, flags, fog, PrecipitationFade::default()))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let params = TraceParameters::from_args();
    if let Err(e) = run(params) {
        log::error!("Trace failed: {}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(params: TraceParameters) -> anyhow::Result<()> {
    let settings = match &params.settings {
        Some(path) => settings::load_from_path(path)?.clamped(),
        None => Default::default(),
    };
    let rules = if params.classic {
        WetnessRules::classic()
    } else {
        WetnessRules::day_night()
    };
    log::info!("Rules: {:?}", rules);

    let fade = PrecipitationFade { begin_fade_in: params.fade, end_fade_out: params.fade };
    let previous = WeatherSample { precipitation: fade, ..params.from };
    let current = WeatherSample { precipitation: fade, ..params.to };
    let scene = if params.interior {
        SceneContext::interior()
    } else {
        SceneContext::exterior()
    };
    let solar = SolarTiming::default().at_hour(params.hour);

    let mut effects = WetnessEffects::new(settings, rules);
    let mut sink = RecordingSink::default();
    let steps = params.steps.max(1);

    println!("{:>6}  {:>8}", "mix", "wetness");
    for step in 0..=steps {
        let mix = step as f32 / steps as f32;
        let sky = SkySnapshot::transition(previous, current, mix).with_solar(solar);
        let frame = FrameInputs {
            scene: Some(&scene),
            sky: Some(&sky),
            ambient: DirectionalAmbient::default(),
        };

        // Every frame is a fresh scene for tracing purposes
        effects.reset();
        effects.draw(&mut sink, ShaderKind::Lighting, &frame)?;
        if let Some(record) = sink.last() {
            println!("{:>6.2}  {:>8.4}", mix, record.wetness);
        }
    }

    log::info!("Traced {} frames", sink.uploads.len());
    Ok(())
}
