//! LARC 批量导出程序入口
//!
//! 无界面的批处理流程：加载XML区域文件，导出DXF。
//! 交互式预览由外部查看器驱动同一套库接口完成。

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use larc_core::polar::{PolarParams, DEFAULT_ANGLE_INCREMENT, DEFAULT_START_ANGLE};
use larc_file::dxf_io::{self, ExportOptions, DEFAULT_SPACING_X};
use larc_file::xml_io;

/// 默认输出文件名
const DEFAULT_OUTPUT: &str = "laser_output.dxf";

/// 命令行参数
#[derive(Debug)]
struct Args {
    input: PathBuf,
    output: PathBuf,
    start_angle_deg: f64,
    angle_increment_deg: f64,
    spacing_x: f64,
}

fn print_usage() {
    eprintln!("Usage: larc <input.xml> [output.dxf] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --start-angle <deg>   Start angle in degrees (default {DEFAULT_START_ANGLE})");
    eprintln!("  --increment <deg>     Angle increment per sample (default {DEFAULT_ANGLE_INCREMENT})");
    eprintln!("  --spacing <units>     Horizontal spacing between areas (default {DEFAULT_SPACING_X})");
    eprintln!("  -h, --help            Show this help");
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut output = None;
    let mut start_angle_deg = DEFAULT_START_ANGLE;
    let mut angle_increment_deg = DEFAULT_ANGLE_INCREMENT;
    let mut spacing_x = DEFAULT_SPACING_X;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--start-angle" => {
                start_angle_deg = args
                    .next()
                    .context("--start-angle requires a value")?
                    .parse()
                    .context("invalid start angle")?;
            }
            "--increment" => {
                angle_increment_deg = args
                    .next()
                    .context("--increment requires a value")?
                    .parse()
                    .context("invalid angle increment")?;
            }
            "--spacing" => {
                spacing_x = args
                    .next()
                    .context("--spacing requires a value")?
                    .parse()
                    .context("invalid spacing")?;
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ if output.is_none() => output = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument: {}", arg),
        }
    }

    let Some(input) = input else {
        print_usage();
        bail!("missing input XML path");
    };

    Ok(Args {
        input,
        output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        start_angle_deg,
        angle_increment_deg,
        spacing_x,
    })
}

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    let args = parse_args()?;

    let areas = xml_io::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let region_count: usize = areas.iter().map(|a| a.region_count()).sum();
    if region_count == 0 {
        // 空结果是合法状态，照常导出一个空图纸
        info!("No drawable regions in input");
    }

    let options = ExportOptions {
        spacing_x: args.spacing_x,
        params: PolarParams::new(args.start_angle_deg, args.angle_increment_deg),
    };
    dxf_io::export(&areas, &args.output, &options)
        .with_context(|| format!("failed to export {}", args.output.display()))?;

    info!("Done: {}", args.output.display());
    Ok(())
}
