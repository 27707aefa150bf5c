use anyhow::{bail, Context, Result};

use rst::logging::{init_logging, LoggingConfig};
use rst::math::Vec3;
use rst::projection::{model_matrix, view_matrix};
use rst::{export, Buffers, Mesh, Primitive, Projection, Rasterizer};

const USAGE: &str = "\
usage: rst [options]
  -o <path>      output PNG (default output.png)
  -w <width>     image width in pixels (default 700)
  -h <height>    image height in pixels (default 700)
  -a <degrees>   rotation about the Z axis (default 0)
  --obj <path>   render an OBJ mesh instead of the demo scene
  --window       show the frame in a window (needs the `window` feature)";

#[derive(Debug)]
struct Args {
    output: String,
    width: u32,
    height: u32,
    angle: f32,
    obj: Option<String>,
    window: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: "output.png".to_string(),
            width: 700,
            height: 700,
            angle: 0.0,
            obj: None,
            window: false,
        }
    }
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);

    while let Some(flag) = it.next() {
        let mut value = || {
            it.next()
                .with_context(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "-o" => args.output = value()?,
            "-w" => args.width = value()?.parse().context("invalid width")?,
            "-h" => args.height = value()?.parse().context("invalid height")?,
            "-a" => args.angle = value()?.parse().context("invalid angle")?,
            "--obj" => args.obj = Some(value()?),
            "--window" => args.window = true,
            "--help" => return Ok(None),
            other => bail!("unknown argument '{other}'\n{USAGE}"),
        }
    }

    if args.width == 0 || args.height == 0 {
        bail!("image size must be non-zero, got {}x{}", args.width, args.height);
    }
    Ok(Some(args))
}

fn render(r: &mut Rasterizer, mesh: &Mesh, angle: f32) -> Result<()> {
    let aspect = r.width() as f32 / r.height() as f32;
    let projection = Projection::from_degrees(45.0, aspect, 0.1, 50.0);

    r.set_model(model_matrix(angle));
    r.set_view(view_matrix(Vec3::new(0.0, 0.0, 5.0)));
    r.set_projection(projection.matrix());

    let pos = r.load_positions(mesh.positions.clone());
    let ind = r.load_indices(mesh.indices.clone());
    let col = r.load_colors(mesh.colors.clone());

    r.clear(Buffers::COLOR | Buffers::DEPTH);
    r.draw(pos, ind, col, Primitive::Triangle)?;
    Ok(())
}

#[cfg(feature = "window")]
fn show(r: &Rasterizer) -> Result<()> {
    use rst::window::{Window, WindowEvent};

    let mut window = Window::new("rst", r.width(), r.height()).map_err(anyhow::Error::msg)?;
    loop {
        if window.poll_events() == WindowEvent::Quit {
            return Ok(());
        }
        window.present(r.framebuffer()).map_err(anyhow::Error::msg)?;
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}

#[cfg(not(feature = "window"))]
fn show(_: &Rasterizer) -> Result<()> {
    bail!("--window requires building with the `window` feature")
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let mesh = match &args.obj {
        Some(path) => Mesh::from_obj(path, Vec3::from_rgb8(217, 238, 185))
            .with_context(|| format!("loading {path}"))?,
        None => Mesh::demo(),
    };

    let mut r = Rasterizer::new(args.width, args.height);
    render(&mut r, &mesh, args.angle)?;

    export::save_png(r.framebuffer(), &args.output)
        .with_context(|| format!("writing {}", args.output))?;
    log::info!(
        "rendered {} faces at {}x{} to {}",
        mesh.face_count(),
        args.width,
        args.height,
        args.output
    );

    if args.window {
        show(&r)?;
    }
    Ok(())
}
