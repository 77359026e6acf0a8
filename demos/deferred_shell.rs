//! Minimal engine-shell frame loop over the built-in pipeline.
//!
//! Registers the G-buffer, depth and light-list resources, adds the two
//! placeholder passes and runs a few frames. Run with
//! `RUST_LOG=debug cargo run --example deferred_shell` to watch the
//! allocation, reuse and pooling decisions.

use anyhow::Result;

use deimos::prelude::*;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const TILE_SIZE: u32 = 16;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut graph = RenderGraph::new();

    for name in DeferredPass::GBUFFER_TARGETS {
        graph.register_resource(name, ResourceDescriptor::color_target(WIDTH, HEIGHT, "RGBA16F"));
    }
    graph.register_resource(
        DeferredPass::DEPTH,
        ResourceDescriptor::depth_stencil(WIDTH, HEIGHT, "D24S8"),
    );
    // The light list survives the frame, so it is excluded from pooling.
    graph.register_resource(
        ForwardPlusPass::LIGHT_LIST,
        ResourceDescriptor::buffer((WIDTH / TILE_SIZE) * (HEIGHT / TILE_SIZE), "LightIndexList")
            .persistent(),
    );

    graph.add_pass(DeferredPass::new());
    graph.add_pass(ForwardPlusPass::new());

    graph.validate()?;

    for frame in 0..3 {
        println!("=== frame {} ===", frame);
        graph.execute();
    }

    println!("{}", graph.dot());
    println!("pool stats: {:?}", graph.pool().stats());

    Ok(())
}
