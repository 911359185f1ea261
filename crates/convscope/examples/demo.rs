//! Demo: build a small chain, pick a node, and sweep.
//!
//! Run with: cargo run --example demo

use convscope::*;

fn print_snapshot() {
    let counts = fields();
    for (i, config) in layer_configs().iter().enumerate() {
        let field = &counts[i];
        println!(
            "  layer {i} '{}': size {}x{}, {} contributing coords (max count {})",
            config.name,
            config.size.x,
            config.size.y,
            field.len(),
            field.max_count()
        );
    }
}

fn main() -> Result<()> {
    init()?;

    append_layer(
        "conv 3",
        Vec3::new(0.4, 0.8, 0.4),
        ConvParams::uniform(5, 1, 2, 2),
    )?;
    set_input_size(IVec2::new(16, 16))?;

    println!("resolved chain:");
    print_snapshot();

    // Pick the center of the last layer.
    let last = layer_configs().len() - 1;
    let size = layer_configs()[last].size;
    select_node(last, size / 2)?;
    println!("\nafter selecting the center of layer {last}:");
    print_snapshot();

    // A few animation ticks of the automatic sweep.
    for _ in 0..3 {
        advance_sweep()?;
    }
    println!("\nselection after three sweep ticks: {:?}", selection());

    // Assemble the renderable scene.
    let scene = build_scene_snapshot(&LayoutOptions::default());
    let padding = scene
        .nodes
        .iter()
        .filter(|n| n.class == NodeClass::Padding)
        .count();
    println!(
        "\nscene: {} nodes ({} padding), display order {:?}",
        scene.nodes.len(),
        padding,
        scene.order
    );

    shutdown();
    Ok(())
}
