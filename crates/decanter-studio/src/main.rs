use anyhow::{Context, Result, anyhow};
use decanter_engine::logging::{LoggingConfig, init_logging};
use decanter_engine::paint::PremulColor;
use decanter_engine::{CupConfig, CupHandle, CupRegistry, CupVisual, LiquidCatalog};
use decanter_liquid::{LiquidType, Mixture};

const CATALOG: &str = include_str!("../data/liquids.cfg");

fn main() -> Result<()> {
    let logging = if std::env::args().any(|arg| arg == "--trace-stack") {
        LoggingConfig::tracing_stack()
    } else {
        LoggingConfig::default()
    };
    init_logging(logging);

    let catalog = LiquidCatalog::parse(CATALOG).context("loading data/liquids.cfg")?;
    log::info!("{} liquids on the bar", catalog.len());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          DECANTER STUDIO v0.1          ║");
    println!("  ║     layered liquids  ·  pour & stir    ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut cups = CupRegistry::new();
    let glass = cups.spawn(CupConfig::with_capacity(4.0)).context("spawning glass")?;
    let mug = cups.spawn(CupConfig::with_capacity(3.0)).context("spawning mug")?;

    let water = liquid(&catalog, "water")?;
    let oil = liquid(&catalog, "oil")?;
    let coffee = liquid(&catalog, "coffee")?;
    let milk = liquid(&catalog, "milk")?;
    let grenadine = liquid(&catalog, "grenadine")?;
    let orange = liquid(&catalog, "orange-juice")?;

    // ── glass: water, oil, drain, stir ────────────────────────────────────
    step(&mut cups, "water 1.0 + water 1.0", |cups| {
        pour(cups, glass, water.clone(), 1.0)?;
        pour(cups, glass, water.clone(), 1.0)
    })?;
    step(&mut cups, "oil 1.0 on top", |cups| pour(cups, glass, oil.clone(), 1.0))?;
    step(&mut cups, "drain 1.5", |cups| {
        let removed = cup(cups, glass)?.drain(1.5)?;
        log::info!("drained {removed}");
        Ok(())
    })?;
    step(&mut cups, "stir", |cups| {
        cup(cups, glass)?.stir();
        Ok(())
    })?;

    // ── mug: latte, then a sunrise that overflows ─────────────────────────
    step(&mut cups, "coffee 1.0 + pre-mixed latte 1.0", |cups| {
        pour(cups, mug, coffee.clone(), 1.0)?;
        let latte = Mixture::from_weights([(coffee.clone(), 1.0), (milk.clone(), 3.0)])?;
        pour(cups, mug, latte, 1.0)
    })?;
    step(&mut cups, "empty mug, grenadine 0.5 + orange 3.0", |cups| {
        cup(cups, mug)?.empty();
        pour(cups, mug, grenadine.clone(), 0.5)?;
        pour(cups, mug, orange.clone(), 3.0)
    })?;

    step(&mut cups, "idle frame", |_| Ok(()))?;

    if let Some(glass) = cups.despawn(glass) {
        log::info!("glass retired holding {}", glass.total_amount());
    }
    Ok(())
}

fn liquid(catalog: &LiquidCatalog, name: &str) -> Result<LiquidType> {
    catalog
        .get(name)
        .cloned()
        .ok_or_else(|| anyhow!("liquid `{name}` is missing from the catalog"))
}

fn cup(cups: &mut CupRegistry, handle: CupHandle) -> Result<&mut decanter_engine::Cup> {
    cups.get_mut(handle).ok_or_else(|| anyhow!("{} no longer exists", handle.id()))
}

fn pour(
    cups: &mut CupRegistry,
    handle: CupHandle,
    what: impl Into<Mixture>,
    amount: f32,
) -> Result<()> {
    let spilled = cup(cups, handle)?.pour(what, amount)?;
    if spilled > 0.0 {
        log::warn!("{} overflowed, {spilled} spilled", handle.id());
    }
    Ok(())
}

/// Runs one user action, then one display cycle.
fn step(
    cups: &mut CupRegistry,
    label: &str,
    action: impl FnOnce(&mut CupRegistry) -> Result<()>,
) -> Result<()> {
    println!("  > {label}");
    action(cups).with_context(|| format!("step `{label}`"))?;

    let updates = cups.collect_updates();
    if updates.is_empty() {
        println!("    (nothing to redraw)");
    }
    for (handle, visual) in updates {
        print_visual(handle, &visual);
    }
    println!();
    Ok(())
}

fn print_visual(handle: CupHandle, visual: &CupVisual) {
    if visual.hidden {
        println!("    {}  [empty]", handle.id());
        return;
    }

    const WIDTH: usize = 20;
    let filled = (visual.fill_fraction * WIDTH as f32).round() as usize;
    println!(
        "    {}  {}{}  {:>5.2} ({:>3.0}%)",
        handle.id(),
        "█".repeat(filled),
        "░".repeat(WIDTH - filled.min(WIDTH)),
        visual.total_amount,
        visual.fill_fraction * 100.0,
    );
    for (lower, upper, color) in visual.strip.bands() {
        println!("      {:>4.2}..{:<4.2}  {}", lower, upper, hex(color));
    }
    println!("      rim {}  base {}", hex(visual.caps.rim), hex(visual.caps.base));
}

fn hex(color: PremulColor) -> String {
    let c = color.to_straight();
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}{:02x}", byte(c.r), byte(c.g), byte(c.b), byte(c.a))
}
