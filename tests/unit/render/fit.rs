use super::*;

fn touches_boundary(r: PixelRect, target: Dimensions) -> bool {
    r.width == target.width || r.height == target.height
}

fn inside(r: PixelRect, target: Dimensions) -> bool {
    r.x >= 0
        && r.y >= 0
        && r.x + i64::from(r.width) <= i64::from(target.width)
        && r.y + i64::from(r.height) <= i64::from(target.height)
}

#[test]
fn wide_raster_fills_width_and_centers_vertically() {
    let target = Dimensions::new(100, 100);
    let r = contain_rect(target, Dimensions::new(400, 200));
    assert_eq!(r, PixelRect { x: 0, y: 25, width: 100, height: 50 });
}

#[test]
fn tall_raster_fills_height_and_centers_horizontally() {
    let target = Dimensions::new(100, 300);
    let r = contain_rect(target, Dimensions::new(50, 600));
    assert_eq!(r.height, 300);
    assert_eq!(r.width, 25);
    assert_eq!(r.x, 37);
    assert_eq!(r.y, 0);
}

#[test]
fn small_raster_is_never_upscaled() {
    let target = Dimensions::new(100, 100);
    let r = contain_rect(target, Dimensions::new(20, 10));
    assert_eq!(r, PixelRect { x: 40, y: 45, width: 20, height: 10 });
}

#[test]
fn contained_for_many_aspect_ratios() {
    let targets = [
        Dimensions::new(100, 100),
        Dimensions::new(80, 300),
        Dimensions::new(640, 7),
    ];
    let sources = [
        Dimensions::new(1000, 1),
        Dimensions::new(1, 1000),
        Dimensions::new(333, 777),
        Dimensions::new(1920, 1080),
        Dimensions::new(640, 640),
    ];
    for target in targets {
        for src in sources {
            let r = contain_rect(target, src);
            assert!(inside(r, target), "{src} in {target}: {r:?}");
            assert!(touches_boundary(r, target), "{src} in {target}: {r:?}");
        }
    }
}

#[test]
fn empty_target_yields_empty_rect() {
    let r = contain_rect(Dimensions::new(0, 10), Dimensions::new(5, 5));
    assert_eq!((r.width, r.height), (0, 0));
}

#[test]
fn tile_origin_centers_one_tile() {
    assert_eq!(tile_origin(Dimensions::new(4, 4), Dimensions::new(2, 2)), (1, 1));
    assert_eq!(tile_origin(Dimensions::new(3, 3), Dimensions::new(2, 2)), (0, 0));
    assert_eq!(tile_origin(Dimensions::new(2, 2), Dimensions::new(4, 5)), (-1, -2));
}
