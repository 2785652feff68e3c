use cutplan::entities::{CutPlanInstance, Layout};
use svg::Document;
use svg::node::element::{Group, Line, Rectangle, Title};

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

pub fn layout_to_svg(
    layout: &Layout,
    instance: &CutPlanInstance,
    options: SvgDrawOptions,
) -> Document {
    let (w, h) = (layout.area_width, layout.area_height);

    //scale the viewbox up slightly so the sheet border is not clipped
    let vbox = (
        -0.025 * w,
        -0.025 * h,
        1.05 * w,
        1.05 * h,
    );

    let stroke_width = f32::min(w, h) * 0.002 * options.stroke_width_multiplier;

    let sheet_group = {
        let title = Title::new(format!(
            "{}, {:.1} x {:.1}",
            layout.source, layout.area_width, layout.area_height
        ));
        Group::new().set("id", "sheet").add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", w)
                .set("height", h)
                .set("fill", svg_util::SHEET_FILL)
                .set("stroke", svg_util::SHEET_STROKE)
                .set("stroke-width", 2.0 * stroke_width)
                .add(title),
        )
    };

    let parts_group = {
        let mut parts_group = Group::new().set("id", "parts");
        for pp in &layout.placed_parts {
            let part = instance.part(pp.part_id);
            let title = Title::new(format!(
                "{}, {:.1} x {:.1}{}",
                part.name,
                pp.width,
                pp.height,
                if pp.rotated { ", rotated" } else { "" }
            ));
            parts_group = parts_group.add(
                Rectangle::new()
                    .set("x", pp.x)
                    .set("y", pp.y)
                    .set("width", pp.width)
                    .set("height", pp.height)
                    .set("fill", svg_util::PART_FILL)
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width)
                    .set("opacity", "0.9")
                    .add(title),
            );
        }
        parts_group
    };

    let banding_group = match options.draw_banding {
        false => None,
        true => {
            let mut banding_group = Group::new().set("id", "banding");
            for pp in &layout.placed_parts {
                let part = instance.part(pp.part_id);
                let banding = match pp.rotated {
                    true => part.edge_banding.rotated(),
                    false => part.edge_banding,
                };
                let edges = [
                    (banding.top, pp.x, pp.y, pp.x_max(), pp.y),
                    (banding.bottom, pp.x, pp.y_max(), pp.x_max(), pp.y_max()),
                    (banding.left, pp.x, pp.y, pp.x, pp.y_max()),
                    (banding.right, pp.x_max(), pp.y, pp.x_max(), pp.y_max()),
                ];
                for (banded, x1, y1, x2, y2) in edges {
                    if banded {
                        banding_group = banding_group.add(
                            Line::new()
                                .set("x1", x1)
                                .set("y1", y1)
                                .set("x2", x2)
                                .set("y2", y2)
                                .set("stroke", svg_util::BANDING_STROKE)
                                .set("stroke-width", 3.0 * stroke_width)
                                .set("stroke-linecap", "round"),
                        );
                    }
                }
            }
            Some(banding_group)
        }
    };

    let cuts_group = match options.draw_cuts {
        false => None,
        true => {
            let mut cuts_group = Group::new().set("id", "cuts");
            for cut in &layout.vertical_cuts {
                for &(start, end) in &cut.segments {
                    cuts_group = cuts_group.add(cut_line(
                        cut.position,
                        start,
                        cut.position,
                        end,
                        stroke_width,
                    ));
                }
            }
            for cut in &layout.horizontal_cuts {
                for &(start, end) in &cut.segments {
                    cuts_group = cuts_group.add(cut_line(
                        start,
                        cut.position,
                        end,
                        cut.position,
                        stroke_width,
                    ));
                }
            }
            Some(cuts_group)
        }
    };

    let optionals = [banding_group, cuts_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    Document::new()
        .set("viewBox", vbox)
        .add(sheet_group)
        .add(parts_group)
        .add(optionals)
}

fn cut_line(x1: f32, y1: f32, x2: f32, y2: f32, stroke_width: f32) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", svg_util::CUT_STROKE)
        .set("stroke-width", stroke_width)
        .set("stroke-dasharray", 5.0 * stroke_width)
        .set("stroke-linecap", "round")
}
